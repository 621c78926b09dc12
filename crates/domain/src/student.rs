//! Student: can be registered to many teachers, and suspended.

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::id::StudentId;

/// A student, identified by a unique email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub email: Email,
    /// Suspended students receive no notifications.
    pub suspended: bool,
}

impl Student {
    /// Create an active student with a freshly generated id.
    #[must_use]
    pub fn new(email: Email) -> Self {
        Self {
            id: StudentId::new(),
            email,
            suspended: false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.suspended
    }

    /// Mark the student as suspended.
    ///
    /// Returns `false` when the student was already suspended, so callers can
    /// skip a redundant write.
    pub fn suspend(&mut self) -> bool {
        let changed = !self.suspended;
        self.suspended = true;
        changed
    }
}
