//! Command handlers for `fk-cli`.

pub mod cart;
pub mod menu;
pub mod order;

use freshking_storefront::error::{AppError, Result};
use freshking_storefront::{CartLedger, Catalog};

/// Build a cart by adding each id in order. Repeated ids add another unit.
///
/// # Errors
///
/// Returns `AppError::UnknownItem` for the first id not on the menu, and
/// `AppError::BadRequest` when no ids are given.
pub fn build_cart(catalog: &Catalog, ids: &[String]) -> Result<CartLedger> {
    if ids.is_empty() {
        return Err(AppError::BadRequest("at least one item id is required".to_string()));
    }

    let mut cart = CartLedger::new();
    for id in ids {
        let item = catalog
            .get(id)
            .ok_or_else(|| AppError::UnknownItem(id.clone()))?;
        cart.add_item(item);
    }
    Ok(cart)
}
