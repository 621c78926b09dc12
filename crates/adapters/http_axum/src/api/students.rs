//! JSON REST handlers for students.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use classroom_app::ports::{StudentRepository, TeacherRepository};
use classroom_domain::error::ValidationError;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body for suspending a student.
#[derive(Deserialize)]
pub struct SuspendRequest {
    pub student: Option<String>,
}

/// Possible responses from the suspend endpoint.
pub enum SuspendResponse {
    NoContent,
}

impl IntoResponse for SuspendResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/suspend`
pub async fn suspend<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    JsonBody(req): JsonBody<SuspendRequest>,
) -> Result<SuspendResponse, ApiError>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = req
        .student
        .filter(|email| !email.is_empty())
        .ok_or(ValidationError::NoStudentSpecified)?;

    state.student_service.suspend(&student).await?;
    Ok(SuspendResponse::NoContent)
}
