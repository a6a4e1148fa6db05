//! Mall Configuration
//!
//! Configuration management and startup utilities for the mall catalog service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	CatalogSettings, ConfigValidationError, CorsSettings, LogFormat, LoggingSettings,
	ServerSettings, Settings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
