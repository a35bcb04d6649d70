//! Configuration management for the assistant bot.
//!
//! This module handles loading configuration from environment variables.
//! It avoids polluting stdout (which the interactive shell owns) by using
//! `dotenvy` for any .env file present.

use std::env;

/// Runtime configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter for stderr diagnostics (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing filter directive (default: "warn")
    pub fn from_env() -> Self {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Config { log_level }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
        }
    }
}
