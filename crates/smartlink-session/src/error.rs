use thiserror::Error;

/// Errors raised by the session codec and store.
///
/// At the HTTP boundary everything except `Expired` collapses into the
/// same unauthenticated response: a corrupted or tampered cookie must be
/// indistinguishable from no cookie at all, so decryption state never
/// leaks to the browser. `Expired` stays distinct so callers can decide
/// between forcing re-login and attempting a refresh.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session cookie was present, or its value was empty.
    #[error("no session present")]
    NoSession,

    /// Ciphertext failed authentication: tampered, truncated, or sealed
    /// with a different key.
    #[error("session cookie failed decryption")]
    Decryption,

    /// The decrypted payload was not a valid session record.
    #[error("session cookie payload corrupted: {0}")]
    Corrupted(String),

    /// The access token expiry has passed.
    #[error("session expired")]
    Expired,

    /// An empty token was offered for an Authorization header.
    #[error("bearer token must not be empty")]
    EmptyToken,

    /// Encryption-side failure (should not occur with a valid key).
    #[error("session encryption failed: {0}")]
    Crypto(String),
}

impl SessionError {
    /// True for every failure that means "no usable session" without
    /// revealing why.
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::NoSession | Self::Decryption | Self::Corrupted(_)
        )
    }
}
