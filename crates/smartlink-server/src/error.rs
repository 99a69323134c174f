//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl
//! is the single place where failures become status codes and JSON
//! bodies. Unauthenticated responses are deliberately uniform: a missing,
//! tampered, or undecryptable cookie all produce the same body, so the
//! browser learns nothing about the cookie's internals.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use smartlink_gateway::UpstreamError;
use smartlink_session::SessionError;

/// Failures surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or query string is missing or malformed input.
    #[error("{0}")]
    InvalidRequest(String),

    /// The path names something the gateway does not serve.
    #[error("{0}")]
    NotFound(String),

    /// No usable session: cookie absent, unreadable, or tampered.
    #[error("authentication required")]
    Unauthenticated,

    /// A session existed but its access token expiry has passed.
    #[error("session expired")]
    SessionExpired,

    /// An upstream server failed; its status is passed through.
    #[error("upstream returned {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// Anything the client cannot act on. Logged, never detailed in the
    /// response body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Value) = match self {
            Self::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "authentication required", "code": "unauthenticated" }),
            ),
            Self::SessionExpired => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "session expired", "code": "session_expired" }),
            ),
            Self::Upstream {
                status,
                message,
                details,
            } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = match details {
                    Some(details) => json!({ "error": message, "details": details }),
                    None => json!({ "error": message }),
                };
                (status, body)
            }
            Self::Internal(message) => {
                error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Expired => Self::SessionExpired,
            SessionError::NoSession
            | SessionError::Decryption
            | SessionError::Corrupted(_)
            | SessionError::EmptyToken => Self::Unauthenticated,
            SessionError::Crypto(message) => Self::Internal(message),
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::InvalidRequest(field) => {
                Self::InvalidRequest(format!("missing required field: {field}"))
            }
            UpstreamError::Upstream { status, body } => Self::Upstream {
                status,
                message: if body.is_empty() {
                    "upstream returned an error".to_string()
                } else {
                    body
                },
                details: None,
            },
            UpstreamError::Transport(message) => Self::Upstream {
                status: 502,
                message: "upstream unreachable".to_string(),
                details: Some(message),
            },
            UpstreamError::InvalidResponse(message) => Self::Upstream {
                status: 502,
                message: "invalid upstream response".to_string(),
                details: Some(message),
            },
        }
    }
}
