//! `GET /auth-params` - launch parameters for the browser.
//!
//! The browser needs the registered client id and scope string to build
//! the authorization redirect. Only the client id crosses this boundary;
//! the secret stays server-side for the token exchange.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use smartlink_core::{ScopeMode, UserRole};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthParamsQuery {
    pub role: String,
    #[serde(rename = "scopeMode", default = "default_scope_mode")]
    pub scope_mode: String,
}

fn default_scope_mode() -> String {
    "online".to_string()
}

pub async fn auth_params(
    State(state): State<AppState>,
    Query(params): Query<AuthParamsQuery>,
) -> Result<Json<Value>, ApiError> {
    let role: UserRole = params
        .role
        .parse()
        .map_err(|e: smartlink_core::SessionRecordError| ApiError::InvalidRequest(e.to_string()))?;
    let mode: ScopeMode = params
        .scope_mode
        .parse()
        .map_err(|e: smartlink_core::SessionRecordError| ApiError::InvalidRequest(e.to_string()))?;

    let credentials = state.config.oauth.credentials_for(role);
    if credentials.client_id.is_empty() {
        error!(role = %role, "No OAuth client configured for role");
        return Err(ApiError::Internal(format!(
            "no OAuth client configured for role {role}"
        )));
    }

    let scopes = state.config.oauth.scopes.for_grant(role, mode);
    Ok(Json(json!({
        "clientId": credentials.client_id,
        "scopes": scopes,
    })))
}
