//! Axum router assembly.

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::http::uri::PathAndQuery;
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use classroom_app::ports::{StudentRepository, TeacherRepository};

use crate::error::{error_response, expose_error_detail};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`, answers unknown paths with a JSON `404`,
/// and includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<TR, SR>(state: AppState<TR, SR>) -> Router
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .fallback(not_found);

    if state.expose_error_details {
        router = router.layer(middleware::map_response(expose_error_detail));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let target = uri.path_and_query().map_or(uri.path(), PathAndQuery::as_str);
    error_response(
        StatusCode::NOT_FOUND,
        format!("Can't find {target} on this server!"),
    )
}
