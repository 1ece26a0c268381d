//! Basket configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BASKET_DATA_DIR` - Directory for persisted collections (default: .naked-pineapple)
//! - `BASKET_CURRENCY` - Display currency, one of USD, EUR, GBP, CAD, AUD (default: USD)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;

use naked_pineapple_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".naked-pineapple";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Basket application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketConfig {
    /// Directory the file store writes to
    pub data_dir: PathBuf,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl BasketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("BASKET_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let currency = lookup("BASKET_CURRENCY")
            .map(|v| {
                v.parse::<CurrencyCode>()
                    .map_err(|e| ConfigError::InvalidEnvVar("BASKET_CURRENCY".to_string(), e))
            })
            .transpose()?
            .unwrap_or_default();
        let sentry_dsn = lookup("SENTRY_DSN").filter(|v| !v.is_empty());

        Ok(Self {
            data_dir,
            currency,
            sentry_dsn,
        })
    }
}
