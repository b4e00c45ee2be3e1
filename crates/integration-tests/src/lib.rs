//! Integration tests for the FreshKing storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p freshking-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_ledger` - Ledger scenarios against the bundled menu
//! - `cart_properties` - Property tests for ledger bookkeeping and totals
//! - `checkout_flow` - Multi-step checkout through order placement
//!
//! This library holds fixtures shared by the test files.

use std::collections::BTreeSet;

use freshking_core::{Category, MenuItemId, NutritionalInfo};
use freshking_storefront::CatalogItem;
use rust_decimal::Decimal;

/// A catalog item with the given id, price in cents and calories.
///
/// Other nutrition fields are derived from `calories` so that every field
/// differs and field mix-ups show up in assertions.
#[must_use]
pub fn test_item(id: &str, price_cents: i64, calories: i64) -> CatalogItem {
    CatalogItem {
        id: MenuItemId::new(id),
        name: format!("Test {id}"),
        description: String::new(),
        category: Category::Bowls,
        price: Decimal::new(price_cents, 2),
        image_url: None,
        nutrition: NutritionalInfo::from_whole(
            calories,
            calories / 10,
            calories / 4,
            calories / 20,
            calories / 50,
        ),
        dietary_tags: BTreeSet::new(),
    }
}
