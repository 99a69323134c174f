//! `POST /session` and `POST /clear-cookies` - session lifecycle.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use time::{Duration, OffsetDateTime};
use tracing::info;

use smartlink_core::{ScopeMode, SessionRecord, UserRole};
use smartlink_session::clear_cookies;

use crate::error::ApiError;
use crate::state::AppState;

/// Token grant result the browser hands back to be sealed into the
/// session cookie.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSessionBody {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds, as reported by the token endpoint.
    pub expires_in: u64,
    pub token_url: String,
    pub fhir_base_url: String,
    pub patient_id: Option<String>,
    pub user_role: String,
    pub scope_mode: String,
}

/// Validates the grant result, seals it into the encrypted session
/// cookie, and returns the `Set-Cookie` header. Raw tokens never travel
/// back to the browser in the body.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionBody>,
) -> Result<Response, ApiError> {
    let user_role: UserRole = body
        .user_role
        .parse()
        .map_err(|e: smartlink_core::SessionRecordError| ApiError::InvalidRequest(e.to_string()))?;
    let scope_mode: ScopeMode = body
        .scope_mode
        .parse()
        .map_err(|e: smartlink_core::SessionRecordError| ApiError::InvalidRequest(e.to_string()))?;

    if body.expires_in == 0 {
        return Err(ApiError::InvalidRequest(
            "expiresIn must be greater than zero".to_string(),
        ));
    }
    // expiresIn comes straight off the wire; an absurd value must fail
    // as a 400, never overflow the expiry arithmetic.
    let expires_at = i64::try_from(body.expires_in)
        .ok()
        .and_then(|secs| OffsetDateTime::now_utc().checked_add(Duration::seconds(secs)))
        .ok_or_else(|| ApiError::InvalidRequest("expiresIn is out of range".to_string()))?;

    let record = SessionRecord {
        access_token: body.access_token,
        refresh_token: body.refresh_token.filter(|t| !t.is_empty()),
        token_url: body.token_url,
        fhir_base_url: body.fhir_base_url,
        patient_id: body.patient_id.filter(|p| !p.is_empty()),
        user_role,
        scope_mode,
        expires_at,
    };
    record
        .validate()
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let cookie = state.sessions.issue_cookie(&record)?;
    info!(role = %record.user_role, mode = %record.scope_mode, "Session established");

    let mut response = (StatusCode::OK, Json(json!({ "success": true }))).into_response();
    response.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| ApiError::Internal(format!("invalid cookie value: {e}")))?,
    );
    Ok(response)
}

/// Clears the session cookie and every legacy cookie name. Idempotent
/// and always 200, even with no session present.
pub async fn clear_session(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cookies = clear_cookies(state.sessions.cookie_name(), state.sessions.cookie_secure());

    let mut response = (StatusCode::OK, Json(json!({ "success": true }))).into_response();
    for cookie in cookies {
        response.headers_mut().append(
            SET_COOKIE,
            HeaderValue::from_str(&cookie)
                .map_err(|e| ApiError::Internal(format!("invalid cookie value: {e}")))?,
        );
    }
    Ok(response)
}
