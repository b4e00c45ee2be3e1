//! Unified error handling.
//!
//! Provides an `AppError` type that front ends (the CLI today) return from
//! their command handlers. Each module keeps its own error enum; this type
//! only aggregates them.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or validated.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout validation or order placement failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// An item id that is not on the menu.
    #[error("Not on the menu: {0}")]
    UnknownItem(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
