//! Notification: free text sent by a teacher, possibly `@mentioning` students.

use crate::email::Email;
use crate::error::{ClassroomError, ValidationError};
use crate::mention::parse_mentioned_emails;

/// A notification request that passed presence checks.
///
/// `teacher` is kept as given: an address that is not a valid email simply
/// never matches a registered teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub teacher: String,
    pub text: String,
}

impl Notification {
    /// Build a notification from optional request fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTeacherOrNotification`] when either
    /// field is absent or empty.
    pub fn new(teacher: Option<String>, text: Option<String>) -> Result<Self, ClassroomError> {
        match (
            teacher.filter(|t| !t.is_empty()),
            text.filter(|t| !t.is_empty()),
        ) {
            (Some(teacher), Some(text)) => Ok(Self { teacher, text }),
            _ => Err(ValidationError::MissingTeacherOrNotification.into()),
        }
    }

    /// Valid email addresses `@mentioned` in the text, in order of appearance.
    #[must_use]
    pub fn mentions(&self) -> Vec<Email> {
        parse_mentioned_emails(&self.text)
    }
}
