//! Authenticated tunnel to the external FHIR server.
//!
//! The client injects the bearer token and forwards the caller's query
//! string byte-for-byte. FHIR search semantics (chained parameters,
//! modifiers, `_include`) are the FHIR server's responsibility; nothing
//! here inspects them.

use tracing::debug;

use crate::UpstreamError;

/// Builds the upstream URL for a resource search: the FHIR base, one
/// path segment for the resource type, and the inbound query string
/// forwarded unchanged.
#[must_use]
pub fn resource_url(fhir_base_url: &str, fhir_type: &str, raw_query: Option<&str>) -> String {
    let base = fhir_base_url.trim_end_matches('/');
    match raw_query {
        Some(query) if !query.is_empty() => format!("{base}/{fhir_type}?{query}"),
        _ => format!("{base}/{fhir_type}"),
    }
}

/// Generic authenticated HTTP forwarder to an external FHIR base URL.
#[derive(Debug, Clone, Default)]
pub struct FhirClient {
    http: reqwest::Client,
}

impl FhirClient {
    /// Creates a client with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client over an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Issues a GET with the given `Authorization` header value and
    /// returns the raw response. Callers inspect the status themselves.
    pub async fn fetch_with_auth(
        &self,
        url: &str,
        authorization: &str,
    ) -> Result<reqwest::Response, UpstreamError> {
        debug!(url = %url, "Forwarding authenticated FHIR request");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_resource_url_concatenation() {
        assert_eq!(
            resource_url("https://fhir.example.com/r4", "Procedure", None),
            "https://fhir.example.com/r4/Procedure"
        );
        // Trailing slash on the base does not double up.
        assert_eq!(
            resource_url("https://fhir.example.com/r4/", "Condition", None),
            "https://fhir.example.com/r4/Condition"
        );
    }

    #[test]
    fn test_query_string_forwarded_verbatim() {
        assert_eq!(
            resource_url(
                "https://fhir.example.com/r4",
                "Procedure",
                Some("patient=123&_count=10")
            ),
            "https://fhir.example.com/r4/Procedure?patient=123&_count=10"
        );
        // Empty query is dropped, not appended as a bare '?'.
        assert_eq!(
            resource_url("https://fhir.example.com/r4", "Procedure", Some("")),
            "https://fhir.example.com/r4/Procedure"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_and_preserves_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Procedure"))
            .and(query_param("patient", "123"))
            .and(query_param("_count", "10"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resourceType": "Bundle",
                "type": "searchset",
                "total": 0
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FhirClient::new();
        let url = resource_url(&mock_server.uri(), "Procedure", Some("patient=123&_count=10"));
        let response = client.fetch_with_auth(&url, "Bearer tok-1").await.unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned_not_swallowed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Procedure"))
            .respond_with(ResponseTemplate::new(403).set_body_string("insufficient scope"))
            .mount(&mock_server)
            .await;

        let client = FhirClient::new();
        let url = resource_url(&mock_server.uri(), "Procedure", None);
        let response = client.fetch_with_auth(&url, "Bearer tok-1").await.unwrap();

        assert_eq!(response.status(), 403);
        assert_eq!(response.text().await.unwrap(), "insufficient scope");
    }

    #[tokio::test]
    async fn test_connect_failure_is_transport_error() {
        let client = FhirClient::new();
        // Port 1 is never listening.
        let err = client
            .fetch_with_auth("http://127.0.0.1:1/Procedure", "Bearer tok")
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }
}
