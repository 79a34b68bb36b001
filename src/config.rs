//! Build Configuration
//!
//! Values baked in at compile time from the environment.

use taskboard_core::api::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
use tracing::Level;

/// API base URL from `TASKBOARD_API_URL` at build time
pub fn api_config() -> ApiConfig {
    let config = ApiConfig::resolve(option_env!("TASKBOARD_API_URL")).unwrap_or_else(|err| {
        tracing::error!(error = %err, "bad {}, using {}", API_URL_ENV, DEFAULT_API_URL);
        ApiConfig::default()
    });
    tracing::info!(base_url = config.base_url(), "task API configured");
    config
}

pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
