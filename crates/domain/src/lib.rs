//! # classroom-domain
//!
//! Pure domain model for the classroom administration service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, validated emails
//! - Define **Teachers** and **Students** (identity by unique email)
//! - Define **Registrations** (a teacher enrolling a set of students)
//! - Define **Notifications** and the `@mention` grammar inside them
//! - Provide the **roster** set operations (common students, recipient merge)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod email;
pub mod error;
pub mod id;

pub mod mention;
pub mod notification;
pub mod registration;
pub mod roster;
pub mod student;
pub mod teacher;
