//! # smartlink-config
//!
//! Configuration for the Smartlink gateway: a TOML file merged with
//! `SMARTLINK__*` environment overrides, validated once at startup.
//! Client secrets and the session encryption secret are expected to come
//! from the environment in anything but local development.

mod error;
mod keys;
mod settings;

pub mod loader;

pub use error::ConfigError;
pub use keys::SessionKey;
pub use settings::{
    ClientCredentials, GatewayConfig, LoggingConfig, OauthConfig, ServerConfig, SessionConfig,
};
