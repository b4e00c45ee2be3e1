//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FRESHKING_CATALOG_PATH` - Menu JSON file (default: bundled menu)
//! - `FRESHKING_CURRENCY` - ISO 4217 display currency (default: USD)
//! - `FRESHKING_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;

use freshking_core::CurrencyCode;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Menu file to load instead of the bundled menu
    pub catalog_path: Option<PathBuf>,
    /// Currency used when displaying prices
    pub currency: CurrencyCode,
    /// Log output format
    pub log_format: LogFormat,
}

impl StorefrontConfig {
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
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let catalog_path = get("FRESHKING_CATALOG_PATH").map(PathBuf::from);
        let currency = get("FRESHKING_CURRENCY")
            .map(|value| value.parse::<CurrencyCode>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("FRESHKING_CURRENCY".to_string(), e))?
            .unwrap_or_default();
        let log_format = match get("FRESHKING_LOG_FORMAT")
            .map(|value| value.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "FRESHKING_LOG_FORMAT".to_string(),
                    format!("expected text or json, got {other}"),
                ));
            }
        };

        Ok(Self {
            catalog_path,
            currency,
            log_format,
        })
    }

    /// Load the configured catalog, falling back to the bundled menu.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog_path
            .as_ref()
            .map_or_else(Catalog::builtin, |path| Catalog::load(path))
    }
}
