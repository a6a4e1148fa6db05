//! Startup and shutdown banners for the mall catalog service

use std::env;

use chrono::Utc;
use tracing::info;

use crate::settings::Settings;

const SERVICE_NAME: &str = "mall-catalog";

fn now() -> String {
	Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Logs the build, host and catalog configuration the service starts with
pub fn log_service_info(settings: &Settings) {
	info!("=== Mall Catalog Service Starting ===");
	info!("🚀 Service: {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
	info!("💻 Platform: {}/{}", env::consts::OS, env::consts::ARCH);

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🗂️ Default ingest mode: {} (source links under {})",
		settings.catalog.ingest_mode, settings.catalog.source_base_link
	);
	if settings.cors.allows_any_origin() {
		info!("🌍 CORS: any origin");
	} else {
		info!(
			"🌍 CORS: {} allowed origin(s)",
			settings.cors.allowed_origins.len()
		);
	}
	info!("🕒 Started at: {}", now());
}

pub fn log_service_shutdown() {
	info!("🛑 Mall Catalog Service Shutting Down at {}", now());
}

pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Mall Catalog Service listening on {}", bind_address);
}
