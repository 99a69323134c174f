//! Configuration loading: TOML file plus environment overrides.

use config::{Config, Environment, File};
use std::path::PathBuf;

use crate::{ConfigError, GatewayConfig};

/// Loads configuration from an optional TOML file, then applies
/// environment overrides such as `SMARTLINK__SERVER__PORT=9090` or
/// `SMARTLINK__SESSION__SECRET=...`, then validates the result.
///
/// A missing file is not an error; the defaults plus environment are
/// enough for a container deployment.
pub fn load_config(path: Option<&str>) -> Result<GatewayConfig, ConfigError> {
    let mut builder = Config::builder();
    match path {
        Some(p) => {
            let pathbuf = PathBuf::from(p);
            if pathbuf.exists() {
                builder = builder.add_source(File::from(pathbuf));
            }
        }
        None => {
            let default_path = PathBuf::from("smartlink.toml");
            if default_path.exists() {
                builder = builder.add_source(File::from(default_path));
            }
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("SMARTLINK")
            .try_parsing(true)
            .separator("__"),
    );

    let cfg = builder
        .build()
        .map_err(|e| ConfigError::Build(e.to_string()))?;
    let merged: GatewayConfig = cfg
        .try_deserialize()
        .map_err(|e| ConfigError::Deserialize(e.to_string()))?;

    merged.validate().map_err(ConfigError::Invalid)?;
    Ok(merged)
}
