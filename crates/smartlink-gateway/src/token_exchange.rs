//! Server-side OAuth 2.0 authorization-code exchange.
//!
//! The browser cannot perform this call itself: the token endpoint sits
//! on another origin and the exchange requires the confidential client
//! secret. The proxy validates its inputs, issues exactly one POST, and
//! hands the token-endpoint JSON back verbatim. It never mints the
//! session cookie; that belongs to the caller, which keeps this path
//! reusable for patient and provider launches in either scope mode.

use serde_json::Value;
use tracing::{debug, warn};

use crate::UpstreamError;

/// Inputs for one authorization-code exchange. Transient and
/// request-scoped; never persisted.
#[derive(Debug, Clone)]
pub struct TokenExchangeRequest {
    /// Authorization code obtained via the browser redirect.
    pub code: String,
    /// The authorization server's token endpoint.
    pub token_url: String,
    /// Registered OAuth client id.
    pub client_id: String,
    /// Confidential client secret; never exposed to the browser.
    pub client_secret: String,
    /// Redirect URI used in the authorization request.
    pub redirect_uri: String,
}

impl TokenExchangeRequest {
    /// Rejects any missing or empty field before network I/O happens.
    pub fn validate(&self) -> Result<(), UpstreamError> {
        if self.code.is_empty() {
            return Err(UpstreamError::InvalidRequest("code"));
        }
        if self.token_url.is_empty() {
            return Err(UpstreamError::InvalidRequest("tokenUrl"));
        }
        if self.client_id.is_empty() {
            return Err(UpstreamError::InvalidRequest("clientId"));
        }
        if self.client_secret.is_empty() {
            return Err(UpstreamError::InvalidRequest("clientSecret"));
        }
        if self.redirect_uri.is_empty() {
            return Err(UpstreamError::InvalidRequest("redirectUri"));
        }
        Ok(())
    }
}

/// Executes authorization-code grants against external token endpoints.
#[derive(Debug, Clone, Default)]
pub struct TokenExchanger {
    http: reqwest::Client,
}

impl TokenExchanger {
    /// Creates an exchanger with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exchanger over an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Performs the exchange: one POST with HTTP Basic client
    /// authentication and a `grant_type=authorization_code` form body.
    ///
    /// A non-success upstream status is passed through as
    /// [`UpstreamError::Upstream`] with the body text; a success body is
    /// returned as unmodified JSON.
    pub async fn exchange(&self, request: &TokenExchangeRequest) -> Result<Value, UpstreamError> {
        request.validate()?;

        debug!(token_url = %request.token_url, client_id = %request.client_id, "Exchanging authorization code");

        let response = self
            .http
            .post(&request.token_url)
            .basic_auth(&request.client_id, Some(&request.client_secret))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", request.code.as_str()),
                ("redirect_uri", request.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Token endpoint rejected the exchange");
            return Err(UpstreamError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn valid_request(token_url: String) -> TokenExchangeRequest {
        TokenExchangeRequest {
            code: "auth-code-1".to_string(),
            token_url,
            client_id: "my-app".to_string(),
            client_secret: "s3cret".to_string(),
            redirect_uri: "https://app.example.com/callback".to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let base = valid_request("https://auth.example.com/token".to_string());

        let mut r = base.clone();
        r.code = String::new();
        assert!(matches!(
            r.validate(),
            Err(UpstreamError::InvalidRequest("code"))
        ));

        let mut r = base.clone();
        r.token_url = String::new();
        assert!(matches!(
            r.validate(),
            Err(UpstreamError::InvalidRequest("tokenUrl"))
        ));

        let mut r = base.clone();
        r.client_id = String::new();
        assert!(matches!(
            r.validate(),
            Err(UpstreamError::InvalidRequest("clientId"))
        ));

        let mut r = base.clone();
        r.client_secret = String::new();
        assert!(matches!(
            r.validate(),
            Err(UpstreamError::InvalidRequest("clientSecret"))
        ));

        let mut r = base.clone();
        r.redirect_uri = String::new();
        assert!(matches!(
            r.validate(),
            Err(UpstreamError::InvalidRequest("redirectUri"))
        ));

        assert!(base.validate().is_ok());
    }

    #[tokio::test]
    async fn test_exchange_sends_basic_auth_and_grant_form() {
        let mock_server = MockServer::start().await;
        let expected_auth = format!("Basic {}", BASE64.encode("my-app:s3cret"));

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("Authorization", expected_auth.as_str()))
            .and(header("Accept", "application/json"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=auth-code-1"))
            .and(body_string_contains("redirect_uri="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-123",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let exchanger = TokenExchanger::new();
        let request = valid_request(format!("{}/token", mock_server.uri()));

        let value = exchanger.exchange(&request).await.unwrap();
        assert_eq!(value["access_token"], "tok-123");
        assert_eq!(value["expires_in"], 3600);
    }

    #[tokio::test]
    async fn test_invalid_request_issues_zero_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let exchanger = TokenExchanger::new();
        let mut request = valid_request(format!("{}/token", mock_server.uri()));
        request.code = String::new();

        let err = exchanger.exchange(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidRequest("code")));
    }

    #[tokio::test]
    async fn test_upstream_failure_passes_status_and_body_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_grant"))
            .mount(&mock_server)
            .await;

        let exchanger = TokenExchanger::new();
        let request = valid_request(format!("{}/token", mock_server.uri()));

        match exchanger.exchange(&request).await.unwrap_err() {
            UpstreamError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_body_returned_verbatim() {
        let mock_server = MockServer::start().await;
        let upstream_body = serde_json::json!({
            "access_token": "tok",
            "refresh_token": "refresh",
            "scope": "launch/patient offline_access patient/*.read",
            "patient": "pat-9",
            "expires_in": 600
        });

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
            .mount(&mock_server)
            .await;

        let exchanger = TokenExchanger::new();
        let request = valid_request(format!("{}/token", mock_server.uri()));

        let value = exchanger.exchange(&request).await.unwrap();
        assert_eq!(value, upstream_body);
    }
}
