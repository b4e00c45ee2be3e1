//! FreshKing Storefront library.
//!
//! The storefront core behind the FreshKing menu site: the menu catalog,
//! the cart ledger, nutrition analysis and checkout. Rendering lives in
//! whichever front end holds a [`cart::CartLedger`]; this crate has no
//! framework dependency.
//!
//! # Modules
//!
//! - [`catalog`] - Read-only menu items and menu-page filtering
//! - [`cart`] - Cart ledger with derived totals
//! - [`nutrition`] - Nutrition dashboard figures for the cart
//! - [`checkout`] - Multi-step checkout and simulated order placement
//! - [`config`] - Environment configuration
//! - [`error`] - Aggregated error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod nutrition;

pub use cart::{CartLedger, CartLine, CartSnapshot};
pub use catalog::{Catalog, CatalogItem, MenuFilter};
pub use checkout::{CheckoutForm, CheckoutSession, CheckoutStep, OrderConfirmation, OrderSummary};
pub use error::AppError;
pub use nutrition::{DailyValues, NutritionReport};
