use thiserror::Error;

/// Errors from outbound calls to the authorization or FHIR server.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A required caller-supplied field is missing or empty. Raised
    /// before any network I/O.
    #[error("missing required field: {0}")]
    InvalidRequest(&'static str),

    /// The upstream returned a non-success status. Status and body text
    /// are passed through so the caller keeps full diagnostic fidelity.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never completed: connect failure, timeout, or a
    /// malformed URL.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The upstream claimed success but the body was not parseable JSON.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport(format!("request timed out: {e}"))
        } else if e.is_connect() {
            Self::Transport(format!("failed to connect: {e}"))
        } else {
            Self::Transport(e.to_string())
        }
    }
}
