//! Typed gateway configuration.
//!
//! Every section has serde defaults so a minimal deployment only supplies
//! the secrets. Validation runs once after loading; handlers never read
//! ambient environment state.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use smartlink_core::{ScopeTable, UserRole};

/// Root gateway configuration.
///
/// # Example (TOML)
///
/// ```toml
/// [server]
/// port = 8080
///
/// [session]
/// cookie_name = "smart_session"
/// expiry_secs = 3600
///
/// [oauth.patient]
/// client_id = "my-patient-app"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub oauth: OauthConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        if self.session.cookie_name.is_empty() {
            return Err("session.cookie_name must not be empty".into());
        }
        if self.session.expiry_secs == 0 {
            return Err("session.expiry_secs must be > 0".into());
        }
        if self.session.secret.is_empty() {
            return Err("session.secret must be set (SMARTLINK__SESSION__SECRET)".into());
        }
        if self.session.salt.is_empty() {
            return Err("session.salt must be set (SMARTLINK__SESSION__SALT)".into());
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Session cookie settings.
///
/// The secret and salt feed the AES-256-GCM cookie codec; they must come
/// from the environment outside local development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the single encrypted session cookie.
    pub cookie_name: String,

    /// Mark the cookie `Secure`. Disable only for local development
    /// over plain HTTP.
    pub cookie_secure: bool,

    /// Session horizon in seconds: the cookie's Max-Age, independent of
    /// the access token's own expiry.
    pub expiry_secs: u64,

    /// Encryption secret: either 32 bytes of hex/base64 or a passphrase.
    pub secret: String,

    /// Salt mixed into passphrase key derivation.
    pub salt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "smart_session".to_string(),
            cookie_secure: true,
            expiry_secs: 3600,
            secret: String::new(),
            salt: String::new(),
        }
    }
}

/// OAuth client configuration, one client per launch role.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OauthConfig {
    /// Client registered for patient launches.
    pub patient: ClientCredentials,
    /// Client registered for provider launches.
    pub provider: ClientCredentials,
    /// Scope strings per role and scope mode.
    pub scopes: ScopeTable,
}

impl OauthConfig {
    /// Returns the client credentials registered for the given role.
    #[must_use]
    pub fn credentials_for(&self, role: UserRole) -> &ClientCredentials {
        match role {
            UserRole::Patient => &self.patient,
            UserRole::Provider => &self.provider,
        }
    }
}

/// A registered OAuth client id/secret pair.
///
/// The secret never leaves the gateway; only the client id is exposed
/// through the launch-parameters endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}
