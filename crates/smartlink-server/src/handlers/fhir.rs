//! `GET /fhir/{resource}` - authenticated FHIR search projection.

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::HeaderMap,
};
use serde_json::Value;
use tracing::warn;

use smartlink_core::Bundle;
use smartlink_gateway::client::resource_url;
use smartlink_session::bearer_header;

use crate::error::ApiError;
use crate::resources::SupportedResource;
use crate::state::AppState;

/// Forwards a search to the session's FHIR server and projects the
/// returned Bundle to `{<resourceKey>: [...], total}`.
///
/// The inbound query string is forwarded byte-for-byte; the gateway
/// never interprets search parameters. An upstream failure is passed
/// through with its own status code.
pub async fn search_resource(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let resource = SupportedResource::from_path(&segment)
        .ok_or_else(|| ApiError::NotFound(format!("unsupported resource: {segment}")))?;

    let record = state.sessions.session_from_headers(&headers)?;
    let authorization = bearer_header(&record.access_token)?;

    let url = resource_url(&record.fhir_base_url, resource.fhir_type(), query.as_deref());
    let response = state.fhir.fetch_with_auth(&url, &authorization).await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            resource = resource.fhir_type(),
            body = %body,
            "FHIR server returned an error"
        );
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message: "FHIR request failed".to_string(),
            details: Some(body),
        });
    }

    let bytes = response.bytes().await.map_err(|e| ApiError::Upstream {
        status: 502,
        message: "failed to read FHIR response".to_string(),
        details: Some(e.to_string()),
    })?;
    let bundle = Bundle::from_json(&bytes).map_err(|e| ApiError::Upstream {
        status: 502,
        message: "invalid FHIR response".to_string(),
        details: Some(e.to_string()),
    })?;

    let projected = bundle.project();
    let mut body = serde_json::Map::new();
    body.insert(
        resource.response_key().to_string(),
        Value::Array(projected.resources),
    );
    body.insert("total".to_string(), Value::from(projected.total));
    Ok(Json(Value::Object(body)))
}
