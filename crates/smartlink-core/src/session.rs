//! Authenticated session record and its closed variants.
//!
//! The `SessionRecord` is the unit of authenticated state. It is created
//! exactly once per login (after a successful authorization-code grant),
//! carried encrypted inside a single browser cookie, read by every
//! authenticated request, and destroyed by teardown or cookie expiry.
//! Nothing mutates a record after creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// Which launch surface authorized the session.
///
/// Determines the scope set requested during authorization and which
/// client credentials the gateway presents to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Patient-facing launch: `patient/` context scopes, patient id present.
    Patient,
    /// Provider-facing launch: `user/` context scopes, no patient context
    /// required.
    Provider,
}

impl UserRole {
    /// Returns the lowercase wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = SessionRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Self::Patient),
            "provider" => Ok(Self::Provider),
            other => Err(SessionRecordError::InvalidRole(other.to_string())),
        }
    }
}

/// Whether the grant included `offline_access`.
///
/// Online sessions never receive a refresh token and end when the access
/// token expires. Offline sessions carry a refresh token and may be renewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// `online_access` grant; session ends with the access token.
    Online,
    /// `offline_access` grant; a refresh token is issued.
    Offline,
}

impl ScopeMode {
    /// Returns the lowercase wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScopeMode {
    type Err = SessionRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(SessionRecordError::InvalidScopeMode(other.to_string())),
        }
    }
}

/// Errors raised when building or validating a session record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionRecordError {
    /// The access token is empty.
    #[error("access token must not be empty")]
    EmptyAccessToken,

    /// The FHIR base URL is empty.
    #[error("FHIR base URL must not be empty")]
    EmptyFhirBaseUrl,

    /// The token endpoint URL is empty.
    #[error("token URL must not be empty")]
    EmptyTokenUrl,

    /// Refresh token presence does not match the scope mode.
    #[error("refresh token is present iff scope mode is offline")]
    RefreshTokenMismatch,

    /// The expiry timestamp is not in the future.
    #[error("session expiry must be in the future")]
    ExpiryInPast,

    /// Unknown user role string.
    #[error("invalid user role: {0}")]
    InvalidRole(String),

    /// Unknown scope mode string.
    #[error("invalid scope mode: {0}")]
    InvalidScopeMode(String),
}

/// The authenticated session state carried in the encrypted cookie.
///
/// Field names are camelCase on the wire so the serialized form matches
/// the token-endpoint vocabulary the browser already speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Bearer token presented to the FHIR server. Required, non-empty.
    pub access_token: String,

    /// Refresh token; present only for offline-access grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Authorization server token endpoint, retained for later refresh.
    pub token_url: String,

    /// Root URL of the authorized FHIR server; all resource requests are
    /// relative to it.
    pub fhir_base_url: String,

    /// Patient context from the launch, absent for provider-only sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,

    /// Which launch surface authorized this session.
    pub user_role: UserRole,

    /// Whether the grant included offline access.
    pub scope_mode: ScopeMode,

    /// Absolute expiry of `access_token`.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl SessionRecord {
    /// Checks whether the access token has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        OffsetDateTime::now_utc() > self.expires_at
    }

    /// Validates the record invariants.
    ///
    /// - `access_token`, `fhir_base_url`, and `token_url` are non-empty
    /// - a refresh token is present iff the scope mode is offline
    /// - `expires_at` is in the future
    pub fn validate(&self) -> Result<(), SessionRecordError> {
        if self.access_token.is_empty() {
            return Err(SessionRecordError::EmptyAccessToken);
        }
        if self.fhir_base_url.is_empty() {
            return Err(SessionRecordError::EmptyFhirBaseUrl);
        }
        if self.token_url.is_empty() {
            return Err(SessionRecordError::EmptyTokenUrl);
        }
        let has_refresh = self
            .refresh_token
            .as_deref()
            .is_some_and(|t| !t.is_empty());
        if has_refresh != (self.scope_mode == ScopeMode::Offline) {
            return Err(SessionRecordError::RefreshTokenMismatch);
        }
        if self.is_expired() {
            return Err(SessionRecordError::ExpiryInPast);
        }
        Ok(())
    }
}
