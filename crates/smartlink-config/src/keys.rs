//! Session encryption key material.
//!
//! The cookie codec uses AES-256-GCM, so it needs exactly 32 key bytes.
//! Deployments may supply the key directly as 32 bytes of hex or base64;
//! anything else is treated as a passphrase and stretched with SHA-256
//! over `secret || salt`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};

use crate::ConfigError;

/// Key size for AES-256 (256 bits)
pub const KEY_SIZE: usize = 32;

/// A 32-byte symmetric key for the session cookie codec.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey([u8; KEY_SIZE]);

impl SessionKey {
    /// Derives a key from the configured secret and salt.
    ///
    /// A secret that decodes to exactly 32 bytes of hex or base64 is used
    /// verbatim (the salt is ignored in that case). Any other non-empty
    /// secret is hashed together with the salt.
    pub fn derive(secret: &str, salt: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::key("session secret must not be empty"));
        }
        if salt.is_empty() {
            return Err(ConfigError::key("session salt must not be empty"));
        }

        if let Some(key) = Self::parse_exact(secret) {
            return Ok(key);
        }

        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(salt.as_bytes());
        let digest = hasher.finalize();

        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&digest);
        Ok(Self(key))
    }

    /// Wraps raw key bytes. Intended for tests.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Tries to interpret the secret as 32 literal key bytes.
    fn parse_exact(secret: &str) -> Option<Self> {
        if secret.len() == KEY_SIZE * 2
            && let Ok(bytes) = hex::decode(secret)
            && bytes.len() == KEY_SIZE
        {
            let mut key = [0u8; KEY_SIZE];
            key.copy_from_slice(&bytes);
            return Some(Self(key));
        }

        if let Ok(bytes) = BASE64.decode(secret.trim())
            && bytes.len() == KEY_SIZE
        {
            let mut key = [0u8; KEY_SIZE];
            key.copy_from_slice(&bytes);
            return Some(Self(key));
        }

        None
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKey")
            .field("bytes", &"<redacted>")
            .finish()
    }
}
