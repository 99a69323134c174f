//! SMART App Launch scope strings per role and scope mode.
//!
//! The four role/scope-mode combinations form a closed set, so the lookup
//! is an exhaustive match rather than ad hoc conditionals. Deployments can
//! override individual entries through configuration; the defaults follow
//! the [SMART App Launch Implementation Guide](https://hl7.org/fhir/smart-app-launch/).

use serde::{Deserialize, Serialize};

use crate::session::{ScopeMode, UserRole};

/// Default scopes for a patient launch with online access.
pub const PATIENT_ONLINE_SCOPES: &str =
    "launch/patient openid fhirUser online_access patient/*.read";

/// Default scopes for a patient launch with offline access.
pub const PATIENT_OFFLINE_SCOPES: &str =
    "launch/patient openid fhirUser offline_access patient/*.read";

/// Default scopes for a provider launch with online access.
pub const PROVIDER_ONLINE_SCOPES: &str = "launch openid fhirUser online_access user/*.read";

/// Default scopes for a provider launch with offline access.
pub const PROVIDER_OFFLINE_SCOPES: &str = "launch openid fhirUser offline_access user/*.read";

/// Scope strings for every role/scope-mode combination.
///
/// # Example (TOML)
///
/// ```toml
/// [oauth.scopes]
/// patient_online = "launch/patient openid online_access patient/*.read"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeTable {
    /// Scopes requested for patient launches without offline access.
    pub patient_online: String,
    /// Scopes requested for patient launches with offline access.
    pub patient_offline: String,
    /// Scopes requested for provider launches without offline access.
    pub provider_online: String,
    /// Scopes requested for provider launches with offline access.
    pub provider_offline: String,
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self {
            patient_online: PATIENT_ONLINE_SCOPES.to_string(),
            patient_offline: PATIENT_OFFLINE_SCOPES.to_string(),
            provider_online: PROVIDER_ONLINE_SCOPES.to_string(),
            provider_offline: PROVIDER_OFFLINE_SCOPES.to_string(),
        }
    }
}

impl ScopeTable {
    /// Returns the scope string for the given role/scope-mode pair.
    #[must_use]
    pub fn for_grant(&self, role: UserRole, mode: ScopeMode) -> &str {
        match (role, mode) {
            (UserRole::Patient, ScopeMode::Online) => &self.patient_online,
            (UserRole::Patient, ScopeMode::Offline) => &self.patient_offline,
            (UserRole::Provider, ScopeMode::Online) => &self.provider_online,
            (UserRole::Provider, ScopeMode::Offline) => &self.provider_offline,
        }
    }
}
