//! Request extractors with classroom-shaped rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use classroom_domain::error::ValidationError;

use crate::error::ApiError;

/// Like [`Json`], but a body that cannot be decoded becomes a `400` error body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(&rejection)),
        }
    }
}

fn malformed(rejection: &JsonRejection) -> ApiError {
    tracing::debug!(%rejection, "rejected request body");
    ValidationError::MalformedBody(rejection.body_text()).into()
}
