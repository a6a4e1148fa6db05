//! Configuration settings structures

use mall_types::IngestMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub catalog: CatalogSettings,
	pub cors: CorsSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8000,
		}
	}
}

/// Collection and ingestion behaviour
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogSettings {
	/// Policy for collection requests that do not name one
	pub ingest_mode: IngestMode,
	/// Storefront base URL used by the template source
	pub source_base_link: String,
}

impl Default for CatalogSettings {
	fn default() -> Self {
		Self {
			ingest_mode: IngestMode::Replace,
			source_base_link: "https://smartstore.naver.com".to_string(),
		}
	}
}

/// Cross-origin policy
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorsSettings {
	/// Allowed origins; `"*"` allows any origin
	pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
	fn default() -> Self {
		Self {
			allowed_origins: vec![
				"http://127.0.0.1:8000".to_string(),
				"http://localhost:8000".to_string(),
				"https://upsourcing-tool.netlify.app".to_string(),
				"*".to_string(),
			],
		}
	}
}

impl CorsSettings {
	pub fn allows_any_origin(&self) -> bool {
		self.allowed_origins.iter().any(|o| o.trim() == "*")
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("server.port must be greater than 0")]
	InvalidPort,
	#[error("server.host must not be empty")]
	EmptyHost,
	#[error("catalog.source_base_link must not be empty")]
	EmptySourceBaseLink,
	#[error("catalog.source_base_link '{link}' is invalid: {reason}")]
	InvalidSourceBaseLink { link: String, reason: String },
	#[error("cors.allowed_origins contains an invalid origin: '{0}'")]
	InvalidOrigin(String),
	#[error("logging.level must not be empty")]
	EmptyLogLevel,
}

/// An origin must serialize back to itself, i.e. `scheme://host[:port]` with no path
fn is_valid_origin(origin: &str) -> bool {
	let origin = origin.trim();
	match Url::parse(origin) {
		Ok(url) => url.origin().ascii_serialization() == origin,
		Err(_) => false,
	}
}

fn validate_base_link(link: &str) -> Result<(), ConfigValidationError> {
	let invalid = |reason: String| ConfigValidationError::InvalidSourceBaseLink {
		link: link.to_string(),
		reason,
	};

	let url = Url::parse(link.trim()).map_err(|e| invalid(e.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid("only HTTP and HTTPS schemes are supported".to_string()));
	}
	if url.host().is_none() {
		return Err(invalid("missing host".to_string()));
	}
	Ok(())
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.server.host.trim().is_empty() {
			return Err(ConfigValidationError::EmptyHost);
		}
		if self.server.port == 0 {
			return Err(ConfigValidationError::InvalidPort);
		}
		if self.catalog.source_base_link.trim().is_empty() {
			return Err(ConfigValidationError::EmptySourceBaseLink);
		}
		validate_base_link(&self.catalog.source_base_link)?;
		if let Some(bad) = self
			.cors
			.allowed_origins
			.iter()
			.find(|o| o.trim() != "*" && !is_valid_origin(o))
		{
			return Err(ConfigValidationError::InvalidOrigin(bad.clone()));
		}
		if self.logging.level.trim().is_empty() {
			return Err(ConfigValidationError::EmptyLogLevel);
		}
		Ok(())
	}
}
