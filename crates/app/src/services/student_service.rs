//! Student service: use-cases acting on a single student.

use classroom_domain::error::{ClassroomError, ValidationError};

use crate::ports::StudentRepository;

/// Application service for student administration.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Suspend the student with `email`. Suspending twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownStudent`] when no such student is
    /// registered, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn suspend(&self, email: &str) -> Result<(), ClassroomError> {
        let mut student = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(ValidationError::UnknownStudent)?;

        if student.suspend() {
            self.repo.update(student).await?;
            tracing::info!("student suspended");
        } else {
            tracing::debug!("student already suspended");
        }
        Ok(())
    }
}
