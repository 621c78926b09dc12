//! Common error types used across the workspace.
//!
//! Every failure that reaches a client is a [`ClassroomError`]. Validation and
//! not-found errors are *operational*: their message is safe to show as-is.
//! Storage errors are not, and adapters must mask them.

use std::error::Error as StdError;

/// Top-level error shared by the domain, application, and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum ClassroomError {
    /// The request was understood but its content is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A resource referenced by the request does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

impl ClassroomError {
    /// Whether the error message may be surfaced to a client verbatim.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Input rejected before or while applying a use-case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing teacher or students")]
    MissingTeacherOrStudents,

    #[error("Invalid teacher email format")]
    InvalidTeacherEmail,

    #[error("Invalid student email format")]
    InvalidStudentEmail,

    #[error("No teachers specified")]
    NoTeachersSpecified,

    #[error("No student specified")]
    NoStudentSpecified,

    #[error("Missing teacher or notification")]
    MissingTeacherOrNotification,

    /// A teacher named in a request body is not registered.
    #[error("Teacher does not exist")]
    UnknownTeacher,

    /// A student named in a request body is not registered.
    #[error("Student does not exist")]
    UnknownStudent,

    /// The request body could not be decoded.
    #[error("{0}")]
    MalformedBody(String),
}

/// A looked-up resource is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} does not exist")]
pub struct NotFoundError {
    /// Kind of resource, e.g. `"Teacher"`.
    pub entity: &'static str,
    /// The key that was looked up.
    pub id: String,
}
