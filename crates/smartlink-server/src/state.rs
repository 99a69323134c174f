//! Shared application state.

use std::sync::Arc;

use smartlink_config::{ConfigError, GatewayConfig};
use smartlink_gateway::{FhirClient, TokenExchanger};
use smartlink_session::SessionStore;

/// Everything a handler needs, cloned per request.
///
/// The session store carries the derived encryption key, so building the
/// state fails fast on an unusable secret instead of failing per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub sessions: SessionStore,
    pub exchanger: TokenExchanger,
    pub fhir: FhirClient,
}

impl AppState {
    /// Builds the state from a validated configuration.
    pub fn from_config(config: GatewayConfig) -> Result<Self, ConfigError> {
        let sessions = SessionStore::from_config(&config.session)?;
        Ok(Self {
            config: Arc::new(config),
            sessions,
            exchanger: TokenExchanger::new(),
            fhir: FhirClient::new(),
        })
    }
}
