//! Teacher: owns a roster of registered students.

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::id::TeacherId;

/// A teacher, identified by a unique email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub email: Email,
}

impl Teacher {
    /// Create a teacher with a freshly generated id.
    #[must_use]
    pub fn new(email: Email) -> Self {
        Self {
            id: TeacherId::new(),
            email,
        }
    }
}
