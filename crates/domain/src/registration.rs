//! Registration: a teacher enrolling a batch of students.

use std::collections::HashSet;

use crate::email::Email;
use crate::error::{ClassroomError, ValidationError};

/// A validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub teacher: Email,
    /// Distinct student emails, in request order.
    pub students: Vec<Email>,
}

impl Registration {
    /// Create a builder for constructing a [`Registration`].
    #[must_use]
    pub fn builder() -> RegistrationBuilder {
        RegistrationBuilder::default()
    }
}

/// Step-by-step builder for [`Registration`].
#[derive(Debug, Default)]
pub struct RegistrationBuilder {
    teacher: Option<String>,
    students: Option<Vec<String>>,
}

impl RegistrationBuilder {
    #[must_use]
    pub fn teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    #[must_use]
    pub fn students<I, S>(mut self, students: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.students = Some(students.into_iter().map(Into::into).collect());
        self
    }

    /// Consume the builder, validate, and return a [`Registration`].
    ///
    /// # Errors
    ///
    /// Returns [`ClassroomError::Validation`] when the teacher or the student
    /// list is missing, or when any address is malformed.
    pub fn build(self) -> Result<Registration, ClassroomError> {
        let (Some(teacher), Some(students)) =
            (self.teacher.filter(|t| !t.is_empty()), self.students)
        else {
            return Err(ValidationError::MissingTeacherOrStudents.into());
        };

        let teacher = Email::parse(teacher).map_err(|_| ValidationError::InvalidTeacherEmail)?;

        let mut seen = HashSet::with_capacity(students.len());
        let mut emails = Vec::with_capacity(students.len());
        for student in students {
            let email = Email::parse(student).map_err(|_| ValidationError::InvalidStudentEmail)?;
            if seen.insert(email.clone()) {
                emails.push(email);
            }
        }

        Ok(Registration {
            teacher,
            students: emails,
        })
    }
}
