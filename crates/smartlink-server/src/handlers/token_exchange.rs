//! `POST /token-exchange` - server-side authorization-code grant.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use smartlink_gateway::TokenExchangeRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Browser-supplied exchange parameters. Absent fields deserialize to
/// empty strings and are rejected by validation before any network I/O.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenExchangeBody {
    pub code: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Performs exactly one authorization-code grant and returns the token
/// endpoint's JSON verbatim. No cookie is set here; the caller decides
/// what to do with the tokens.
pub async fn token_exchange(
    State(state): State<AppState>,
    Json(body): Json<TokenExchangeBody>,
) -> Result<Json<Value>, ApiError> {
    let request = TokenExchangeRequest {
        code: body.code,
        token_url: body.token_url,
        client_id: body.client_id,
        client_secret: body.client_secret,
        redirect_uri: body.redirect_uri,
    };

    let tokens = state.exchanger.exchange(&request).await?;
    info!(client_id = %request.client_id, "Authorization code exchanged");
    Ok(Json(tokens))
}
