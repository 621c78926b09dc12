//! # classroom-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TeacherRepository`: upsert and look up teachers, enrol students
//!   - `StudentRepository`: upsert, look up, and update students
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TeacherService`: register, common students, notification recipients
//!   - `StudentService`: suspend
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `classroom-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
