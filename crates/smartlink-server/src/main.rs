use std::env;

use smartlink_config::loader::load_config;
use smartlink_server::ServerBuilder;

/// How the configuration path was determined.
#[derive(Debug, Clone, Copy)]
enum ConfigSource {
    /// From --config CLI argument
    CliArgument,
    /// From SMARTLINK_CONFIG environment variable
    EnvironmentVariable,
    /// Default path (smartlink.toml)
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliArgument => write!(f, "CLI argument (--config)"),
            Self::EnvironmentVariable => write!(f, "environment variable (SMARTLINK_CONFIG)"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before anything else) so local
    // development can keep secrets out of the shell.
    if let Err(e) = dotenvy::dotenv()
        && !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
    {
        eprintln!("Warning: Failed to load .env file: {e}");
    }

    let (config_path, source) = resolve_config_path();

    // Configuration errors land on stderr; tracing is not up yet.
    let cfg = match load_config(Some(&config_path)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    smartlink_server::observability::init_tracing(&cfg.logging);

    tracing::info!(
        path = %config_path,
        source = %source,
        "Configuration loaded"
    );

    let server = match ServerBuilder::new().with_config(cfg).build() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Server initialization failed: {e}");
            std::process::exit(2);
        }
    };

    if let Err(err) = server.run().await {
        eprintln!("Server error: {err}");
    }
}

/// Resolve the configuration file path.
///
/// Priority order:
/// 1. CLI argument: --config <path>
/// 2. Environment variable: SMARTLINK_CONFIG
/// 3. Default: smartlink.toml in the working directory
fn resolve_config_path() -> (String, ConfigSource) {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config"
            && let Some(path) = args.next()
        {
            return (path, ConfigSource::CliArgument);
        }
    }

    if let Ok(path) = env::var("SMARTLINK_CONFIG")
        && !path.is_empty()
    {
        return (path, ConfigSource::EnvironmentVariable);
    }

    ("smartlink.toml".to_string(), ConfigSource::Default)
}
