use std::env;
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Loads configuration and sets up logging.
///
/// The configuration file path is taken from the WEATHERDASH_CONF environment
/// variable, falling back to weatherdash.toml in the working directory.
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("WEATHERDASH_CONF")
        .unwrap_or_else(|_| "weatherdash.toml".to_string());

    let config = load_config(&config_path)?;
    setup_logger(&config.general)?;

    Ok(config)
}
