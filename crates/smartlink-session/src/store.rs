//! Session cookie reading and issuing.
//!
//! The store is the only reader of the session cookie. It resolves an
//! inbound request to either a typed [`SessionRecord`] or a
//! [`SessionError`]; a corrupted cookie is treated exactly like a
//! missing one and never crashes the caller.

use axum::http::{HeaderMap, header::COOKIE};
use tracing::debug;

use smartlink_config::{ConfigError, SessionConfig, SessionKey};
use smartlink_core::SessionRecord;

use crate::{SessionCodec, SessionError};

/// Formats a bearer token for an outbound `Authorization` header.
pub fn bearer_header(token: &str) -> Result<String, SessionError> {
    if token.is_empty() {
        return Err(SessionError::EmptyToken);
    }
    Ok(format!("Bearer {token}"))
}

/// Reads and writes the encrypted session cookie.
#[derive(Debug, Clone)]
pub struct SessionStore {
    codec: SessionCodec,
    cookie_name: String,
    cookie_secure: bool,
    max_age_secs: u64,
}

impl SessionStore {
    /// Builds a store from the session configuration, deriving the
    /// encryption key from its secret and salt.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let key = SessionKey::derive(&config.secret, &config.salt)?;
        Ok(Self {
            codec: SessionCodec::new(&key),
            cookie_name: config.cookie_name.clone(),
            cookie_secure: config.cookie_secure,
            max_age_secs: config.expiry_secs,
        })
    }

    /// The configured session cookie name.
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Whether issued cookies carry the `Secure` attribute.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    /// Resolves the inbound request to the current session.
    ///
    /// Fails with `NoSession` when the cookie is absent, `Decryption` or
    /// `Corrupted` when it is unreadable, and `Expired` when the access
    /// token expiry has passed.
    pub fn session_from_headers(&self, headers: &HeaderMap) -> Result<SessionRecord, SessionError> {
        let blob =
            extract_cookie(headers, &self.cookie_name).ok_or(SessionError::NoSession)?;

        let record = match self.codec.decrypt(&blob) {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "Unreadable session cookie");
                return Err(e);
            }
        };

        if record.is_expired() {
            return Err(SessionError::Expired);
        }

        Ok(record)
    }

    /// Encrypts a record into a full `Set-Cookie` value.
    ///
    /// The cookie is HTTP-only, `SameSite=Lax`, path `/`, bounded by the
    /// session horizon, and `Secure` unless disabled for local development.
    pub fn issue_cookie(&self, record: &SessionRecord) -> Result<String, SessionError> {
        let blob = self.codec.encrypt(record)?;
        let secure = if self.cookie_secure { "; Secure" } else { "" };
        Ok(format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax{}",
            self.cookie_name, blob, self.max_age_secs, secure
        ))
    }
}

/// Extracts a cookie value by name from the `Cookie` header.
fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookie_header = headers.get(COOKIE)?.to_str().ok()?;

    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some((name, value)) = cookie.split_once('=')
            && name.trim() == cookie_name
        {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use smartlink_core::{ScopeMode, UserRole};
    use time::{Duration, OffsetDateTime};

    fn test_store() -> SessionStore {
        let config = SessionConfig {
            cookie_name: "smart_session".to_string(),
            cookie_secure: false,
            expiry_secs: 3600,
            secret: "test-secret".to_string(),
            salt: "test-salt".to_string(),
        };
        SessionStore::from_config(&config).unwrap()
    }

    fn test_record(expires_at: OffsetDateTime) -> SessionRecord {
        SessionRecord {
            access_token: "tok-1".to_string(),
            refresh_token: None,
            token_url: "https://auth.example.com/token".to_string(),
            fhir_base_url: "https://fhir.example.com/r4".to_string(),
            patient_id: None,
            user_role: UserRole::Provider,
            scope_mode: ScopeMode::Online,
            expires_at,
        }
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_header_formatting() {
        assert_eq!(bearer_header("abc").unwrap(), "Bearer abc");
        assert!(matches!(bearer_header(""), Err(SessionError::EmptyToken)));
    }

    #[test]
    fn test_absent_cookie_is_no_session() {
        let store = test_store();
        let err = store.session_from_headers(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, SessionError::NoSession));
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_issue_then_read_roundtrip() {
        let store = test_store();
        let record = test_record(OffsetDateTime::now_utc() + Duration::hours(1));

        let set_cookie = store.issue_cookie(&record).unwrap();
        assert!(set_cookie.starts_with("smart_session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Max-Age=3600"));
        assert!(!set_cookie.contains("Secure"));

        // The cookie pair is everything before the first attribute.
        let pair = set_cookie.split(';').next().unwrap();
        let headers = headers_with_cookie(pair);

        let back = store.session_from_headers(&headers).unwrap();
        assert_eq!(back.access_token, "tok-1");
        assert_eq!(back.user_role, UserRole::Provider);
    }

    #[test]
    fn test_secure_attribute_follows_config() {
        let config = SessionConfig {
            cookie_secure: true,
            secret: "test-secret".to_string(),
            salt: "test-salt".to_string(),
            ..SessionConfig::default()
        };
        let store = SessionStore::from_config(&config).unwrap();
        let record = test_record(OffsetDateTime::now_utc() + Duration::hours(1));
        assert!(store.issue_cookie(&record).unwrap().contains("; Secure"));
    }

    #[test]
    fn test_corrupted_cookie_is_unauthenticated() {
        let store = test_store();
        let headers = headers_with_cookie("smart_session=AAAA_garbage");
        let err = store.session_from_headers(&headers).unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_expired_session_is_distinguishable() {
        let store = test_store();
        let record = test_record(OffsetDateTime::now_utc() - Duration::seconds(5));

        let set_cookie = store.issue_cookie(&record).unwrap();
        let pair = set_cookie.split(';').next().unwrap();
        let headers = headers_with_cookie(pair);

        let err = store.session_from_headers(&headers).unwrap_err();
        assert!(matches!(err, SessionError::Expired));
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn test_cookie_found_among_others() {
        let store = test_store();
        let record = test_record(OffsetDateTime::now_utc() + Duration::hours(1));
        let set_cookie = store.issue_cookie(&record).unwrap();
        let pair = set_cookie.split(';').next().unwrap();

        let headers = headers_with_cookie(&format!("theme=dark; {pair}; lang=en"));
        assert!(store.session_from_headers(&headers).is_ok());
    }

    #[test]
    fn test_empty_cookie_value_is_no_session() {
        let store = test_store();
        let headers = headers_with_cookie("smart_session=");
        assert!(matches!(
            store.session_from_headers(&headers),
            Err(SessionError::NoSession)
        ));
    }
}
