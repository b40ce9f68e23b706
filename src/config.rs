//! Configuration Module
//!
//! Handles loading register settings from environment variables.

use std::env;
use std::time::Duration;

/// Default sweep interval in milliseconds
const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 1000;

/// Register configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time between two background sweeps
    pub cleanup_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEANUP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let cleanup_interval_ms = env::var("CLEANUP_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CLEANUP_INTERVAL_MS);

        Self {
            cleanup_interval: Duration::from_millis(cleanup_interval_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_millis(DEFAULT_CLEANUP_INTERVAL_MS),
        }
    }
}
