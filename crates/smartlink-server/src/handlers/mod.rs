//! HTTP handlers.
//!
//! Health and info endpoints live here; each functional endpoint gets
//! its own module.

pub mod auth_params;
pub mod fhir;
pub mod session;
pub mod token_exchange;

pub use auth_params::auth_params;
pub use fhir::search_resource;
pub use session::{clear_session, create_session};
pub use token_exchange::token_exchange;

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "Smartlink Gateway",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub async fn readyz() -> impl IntoResponse {
    // The gateway holds no connections of its own; ready once the key
    // derivation in AppState construction has succeeded.
    (StatusCode::OK, Json(HealthResponse { status: "ready" }))
}
