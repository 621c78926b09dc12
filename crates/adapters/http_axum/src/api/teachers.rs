//! JSON REST handlers for teacher-facing use-cases.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use classroom_app::ports::{StudentRepository, TeacherRepository};
use classroom_domain::email::Email;
use classroom_domain::notification::Notification;
use classroom_domain::registration::Registration;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Query parameter naming a teacher; may be repeated.
const TEACHER_PARAM: &str = "teacher";

/// Request body for registering students to a teacher.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub teacher: Option<String>,
    /// Anything but an array counts as a missing student list.
    pub students: Option<Value>,
}

/// Request body for resolving notification recipients.
#[derive(Deserialize)]
pub struct RetrieveForNotificationsRequest {
    pub teacher: Option<String>,
    pub notification: Option<String>,
}

#[derive(Serialize)]
pub struct CommonStudentsBody {
    pub status: &'static str,
    pub students: Vec<Email>,
}

#[derive(Serialize)]
pub struct RecipientsBody {
    pub status: &'static str,
    pub recipients: Vec<Email>,
}

/// Possible responses from the register endpoint.
pub enum RegisterResponse {
    NoContent,
}

impl IntoResponse for RegisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the common students endpoint.
pub enum CommonStudentsResponse {
    Ok(Json<CommonStudentsBody>),
}

impl IntoResponse for CommonStudentsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the notification recipients endpoint.
pub enum RecipientsResponse {
    Ok(Json<RecipientsBody>),
}

impl IntoResponse for RecipientsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/register`
pub async fn register<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<RegisterResponse, ApiError>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let mut builder = Registration::builder();
    if let Some(teacher) = req.teacher {
        builder = builder.teacher(teacher);
    }
    if let Some(Value::Array(students)) = req.students {
        builder = builder.students(students.into_iter().map(student_address));
    }

    let registration = builder.build()?;
    state.teacher_service.register(registration).await?;
    Ok(RegisterResponse::NoContent)
}

/// A non-string entry maps to an empty address, which fails email validation.
fn student_address(value: Value) -> String {
    match value {
        Value::String(address) => address,
        _ => String::new(),
    }
}

/// `GET /api/commonstudents?teacher=a%40x.com&teacher=b%40x.com`
pub async fn common_students<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<CommonStudentsResponse, ApiError>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let teachers: Vec<String> = params
        .into_iter()
        .filter(|(key, value)| key == TEACHER_PARAM && !value.is_empty())
        .map(|(_, value)| value)
        .collect();

    let students = state.teacher_service.common_students(&teachers).await?;
    Ok(CommonStudentsResponse::Ok(Json(CommonStudentsBody {
        status: "success",
        students,
    })))
}

/// `POST /api/retrievefornotifications`
pub async fn retrieve_for_notifications<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    JsonBody(req): JsonBody<RetrieveForNotificationsRequest>,
) -> Result<RecipientsResponse, ApiError>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let notification = Notification::new(req.teacher, req.notification)?;
    let recipients = state.teacher_service.recipients_for(&notification).await?;
    Ok(RecipientsResponse::Ok(Json(RecipientsBody {
        status: "success",
        recipients,
    })))
}
