//! Shared application state for axum handlers.

use std::sync::Arc;

use classroom_app::ports::{StudentRepository, TeacherRepository};
use classroom_app::services::student_service::StudentService;
use classroom_app::services::teacher_service::TeacherService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<TR, SR> {
    /// Registration, common-student and notification use-cases.
    pub teacher_service: Arc<TeacherService<TR, SR>>,
    /// Suspension use-case.
    pub student_service: Arc<StudentService<SR>>,
    /// Include the cause of internal errors in response bodies.
    pub expose_error_details: bool,
}

impl<TR, SR> Clone for AppState<TR, SR> {
    fn clone(&self) -> Self {
        Self {
            teacher_service: Arc::clone(&self.teacher_service),
            student_service: Arc::clone(&self.student_service),
            expose_error_details: self.expose_error_details,
        }
    }
}

impl<TR, SR> AppState<TR, SR>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    ///
    /// Internal error details are hidden until enabled with
    /// [`AppState::with_error_details`].
    pub fn new(
        teacher_service: TeacherService<TR, SR>,
        student_service: StudentService<SR>,
    ) -> Self {
        Self {
            teacher_service: Arc::new(teacher_service),
            student_service: Arc::new(student_service),
            expose_error_details: false,
        }
    }

    /// Toggle whether internal error causes are sent to clients.
    #[must_use]
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
