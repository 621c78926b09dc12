//! HTTP error response mapping.

use std::error::Error as StdError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use classroom_domain::error::{ClassroomError, ValidationError};

/// Message shown to clients in place of a non-operational error.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ErrorBody {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: if status.is_client_error() {
                "fail"
            } else {
                "error"
            },
            message,
            detail: None,
        }
    }
}

/// Internal cause of a masked error, attached to the response extensions.
#[derive(Debug, Clone)]
struct ErrorDetail(String);

/// Maps [`ClassroomError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ClassroomError);

impl From<ClassroomError> for ApiError {
    fn from(err: ClassroomError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ClassroomError::Validation(_) => StatusCode::BAD_REQUEST,
            ClassroomError::NotFound(_) => StatusCode::NOT_FOUND,
            ClassroomError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if self.0.is_operational() {
            return error_response(status, self.0.to_string());
        }

        let detail = error_chain(&self.0);
        tracing::error!(error = %detail, "unexpected error");
        let mut response = error_response(status, INTERNAL_ERROR_MESSAGE.to_string());
        response.extensions_mut().insert(ErrorDetail(detail));
        response
    }
}

/// Render an error body with the given status.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody::new(status, message))).into_response()
}

fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

/// Response middleware that re-renders masked errors with their cause.
///
/// Only installed outside production.
pub(crate) async fn expose_error_detail(response: Response) -> Response {
    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    let mut body = ErrorBody::new(status, INTERNAL_ERROR_MESSAGE.to_string());
    body.detail = Some(detail);
    (status, Json(body)).into_response()
}
