//! Shared helpers for the integration suites.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde_json::Value;
use time::{Duration, OffsetDateTime};

use smartlink_config::GatewayConfig;
use smartlink_core::{ScopeMode, SessionRecord, UserRole};
use smartlink_server::{AppState, build_app};
use smartlink_session::SessionStore;

/// A fully configured gateway for tests: fixed secrets, insecure
/// cookies (no TLS in tests), one client per role.
pub fn test_config() -> GatewayConfig {
    let mut cfg = GatewayConfig::default();
    cfg.session.secret = "integration-test-secret".to_string();
    cfg.session.salt = "integration-test-salt".to_string();
    cfg.session.cookie_secure = false;
    cfg.oauth.patient.client_id = "patient-app".to_string();
    cfg.oauth.patient.client_secret = "patient-secret".to_string();
    cfg.oauth.provider.client_id = "provider-app".to_string();
    cfg.oauth.provider.client_secret = "provider-secret".to_string();
    cfg
}

/// Builds the router plus a store sharing the same key, so tests can
/// mint cookies the app will accept.
pub fn test_app() -> (Router, SessionStore) {
    let cfg = test_config();
    let store = SessionStore::from_config(&cfg.session).unwrap();
    let state = AppState::from_config(cfg).unwrap();
    (build_app(state), store)
}

/// A provider session pointing at the given FHIR base, expiring in an hour.
pub fn test_record(fhir_base_url: &str) -> SessionRecord {
    SessionRecord {
        access_token: "tok-1".to_string(),
        refresh_token: None,
        token_url: "https://auth.example.com/token".to_string(),
        fhir_base_url: fhir_base_url.to_string(),
        patient_id: None,
        user_role: UserRole::Provider,
        scope_mode: ScopeMode::Online,
        expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
    }
}

/// Turns a `Set-Cookie` value into the `Cookie` header pair.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().to_string()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
