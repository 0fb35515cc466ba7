use std::env;

use appdeck_server::config::loader::load_config;
use appdeck_server::{AppState, ServerBuilder};

/// How the configuration path was determined.
#[derive(Debug, Clone, Copy)]
enum ConfigSource {
    /// From --config CLI argument
    CliArgument,
    /// From APPDECK_CONFIG environment variable
    EnvironmentVariable,
    /// Default path (appdeck.toml)
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliArgument => write!(f, "CLI argument (--config)"),
            Self::EnvironmentVariable => write!(f, "environment variable (APPDECK_CONFIG)"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present, so STRIPE_SECRET_KEY and friends can be
    // set locally without exporting them.
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    appdeck_server::observability::init_tracing();

    let (config_path, source) = resolve_config_path();

    let cfg = match load_config(Some(&config_path)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        path = %config_path,
        source = %source,
        "Configuration loaded"
    );

    appdeck_server::observability::apply_logging_level(&cfg.logging.level);

    let directory = match appdeck_server::load_directory(&cfg.directory.manifest_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Directory load failed: {e:#}");
            std::process::exit(2);
        }
    };

    if cfg.stripe.secret_key.is_none() {
        tracing::warn!("stripe.secret_key not set; checkout endpoint will report unconfigured");
    }

    let server = ServerBuilder::new(AppState::new(directory, cfg)).build();
    if let Err(err) = server.run().await {
        eprintln!("Server error: {err}");
    }
}

/// Resolve the configuration file path.
///
/// Priority order:
/// 1. CLI argument: --config <path>
/// 2. Environment variable: APPDECK_CONFIG
/// 3. Default: appdeck.toml
fn resolve_config_path() -> (String, ConfigSource) {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return (path, ConfigSource::CliArgument);
            }
        }
    }

    if let Ok(path) = env::var("APPDECK_CONFIG") {
        if !path.is_empty() {
            return (path, ConfigSource::EnvironmentVariable);
        }
    }

    ("appdeck.toml".to_string(), ConfigSource::Default)
}
