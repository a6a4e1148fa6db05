//! Configuration loading utilities

use crate::{ConfigValidationError, Settings};
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Default config file, resolved without extension by the `config` crate
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix for environment overrides, e.g. `MALL__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "MALL";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("failed to load configuration: {0}")]
	Config(#[from] ConfigError),
	#[error("invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from the default config file and environment.
///
/// `CONFIG_PATH` overrides the config file location.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from `path` (optional file) layered under environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key("cors.allowed_origins"),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
