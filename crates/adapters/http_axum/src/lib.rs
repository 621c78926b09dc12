//! # classroom-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api`
//!   (`register`, `commonstudents`, `suspend`, `retrievefornotifications`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Error bodies
//! Every failure is rendered as `{"status": "fail" | "error", "message": "..."}`.
//! Validation and not-found messages are shown as-is; storage failures are
//! logged and masked unless the state enables error details.
//!
//! ## Dependency rule
//! Depends on `classroom-app` (for port traits and services) and `classroom-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
mod extract;
pub mod router;
pub mod state;
