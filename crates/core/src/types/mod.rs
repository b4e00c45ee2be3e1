//! Core types for the FreshKing storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod menu;
pub mod nutrition;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use menu::{Category, DietaryFilter, PaymentMethod};
pub use nutrition::NutritionalInfo;
pub use price::{CurrencyCode, Price};
