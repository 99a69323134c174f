//! Session record encryption using AES-256-GCM.
//!
//! The cookie value is `base64(nonce || ciphertext)`: a fresh random
//! 96-bit nonce per seal, followed by the AEAD output. The GCM tag makes
//! tampering detectable, not merely obscured; replay protection is left
//! to the cookie's own Max-Age horizon.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;

use smartlink_config::SessionKey;
use smartlink_core::SessionRecord;

use crate::SessionError;

/// Nonce size for AES-256-GCM (96 bits)
const NONCE_SIZE: usize = 12;

/// Seals and opens session records as opaque cookie blobs.
#[derive(Clone)]
pub struct SessionCodec {
    cipher: Aes256Gcm,
}

impl SessionCodec {
    /// Creates a codec from derived key material.
    #[must_use]
    pub fn new(key: &SessionKey) -> Self {
        // new_from_slice only fails on wrong key length; SessionKey is
        // always exactly 32 bytes.
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .unwrap_or_else(|_| unreachable!("SessionKey is always KEY_SIZE bytes"));
        Self { cipher }
    }

    /// Serializes and encrypts a session record.
    pub fn encrypt(&self, record: &SessionRecord) -> Result<String, SessionError> {
        let plaintext =
            serde_json::to_vec(record).map_err(|e| SessionError::Crypto(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_ref())
            .map_err(|e| SessionError::Crypto(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(blob))
    }

    /// Decrypts and deserializes a cookie blob.
    ///
    /// Empty input is reported as [`SessionError::NoSession`]; any
    /// tampered, truncated, or wrong-key blob fails the AEAD tag check
    /// and is reported as [`SessionError::Decryption`].
    pub fn decrypt(&self, blob: &str) -> Result<SessionRecord, SessionError> {
        if blob.is_empty() {
            return Err(SessionError::NoSession);
        }

        let bytes = BASE64.decode(blob).map_err(|_| SessionError::Decryption)?;
        if bytes.len() <= NONCE_SIZE {
            return Err(SessionError::Decryption);
        }

        let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| SessionError::Decryption)?;

        serde_json::from_slice(&plaintext).map_err(|e| SessionError::Corrupted(e.to_string()))
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec").finish_non_exhaustive()
    }
}
