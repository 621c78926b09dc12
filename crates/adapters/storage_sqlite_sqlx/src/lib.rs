//! # classroom-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `classroom-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `classroom-app` (for port traits) and `classroom-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod student_repo;
mod teacher_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use student_repo::SqliteStudentRepository;
pub use teacher_repo::SqliteTeacherRepository;
