//! FreshKing Core - Shared types library.
//!
//! This crate provides common types used across all FreshKing components:
//! - `storefront` - Catalog, cart ledger, nutrition analysis and checkout
//! - `cli` - Command-line front end for browsing the menu and ordering
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no logging,
//! no configuration. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, nutrition facts, emails and menu labels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use rust_decimal::Decimal;
pub use types::*;
