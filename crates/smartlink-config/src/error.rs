use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config build error: {0}")]
    Build(String),

    #[error("config deserialize error: {0}")]
    Deserialize(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("session key error: {0}")]
    Key(String),
}

impl ConfigError {
    /// Create a new Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Create a new Key error
    pub fn key(message: impl Into<String>) -> Self {
        Self::Key(message.into())
    }
}
