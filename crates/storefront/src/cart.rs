//! Cart ledger: which catalog items are in the cart and how many of each.
//!
//! The ledger is owned by a single session and mutated synchronously, one
//! command at a time. Totals are derived on demand from the quantities map
//! rather than stored.
//!
//! # Invariants
//!
//! - Every quantity is at least 1. An item whose quantity reaches 0 is
//!   removed from the ledger entirely.
//! - `items` holds exactly the items that have a quantity, each once, in the
//!   order they were first added.

use std::collections::HashMap;

use freshking_core::{CurrencyCode, MenuItemId, NutritionalInfo, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogItem};

/// In-memory cart state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    quantities: HashMap<MenuItemId, u32>,
    items: Vec<CatalogItem>,
}

/// One cart row: an item and how many of it are in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub item: &'a CatalogItem,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// `price * quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }

    /// Nutrition for the whole line.
    #[must_use]
    pub fn line_nutrition(&self) -> NutritionalInfo {
        self.item.nutrition.scaled(self.quantity)
    }
}

impl CartLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`.
    ///
    /// A new item is appended with quantity 1; an item already in the cart
    /// has its quantity incremented. Malformed items (empty id, negative or
    /// oversized price or nutrition) are ignored, as is an add that would
    /// push a quantity past `u32::MAX`.
    pub fn add_item(&mut self, item: &CatalogItem) {
        debug_assert!(item.is_well_formed(), "malformed catalog item {}", item.id);
        if !item.is_well_formed() {
            tracing::warn!(item_id = %item.id, "Ignoring malformed catalog item");
            return;
        }

        let current = self.quantity_of(item.id.as_str());
        let Some(quantity) = current.checked_add(1) else {
            tracing::warn!(
                item_id = %item.id,
                quantity = current,
                "Quantity limit reached, add ignored"
            );
            return;
        };
        if current == 0 {
            self.items.push(item.clone());
        }
        self.quantities.insert(item.id.clone(), quantity);

        tracing::debug!(item_id = %item.id, quantity, "Added item to cart");
    }

    /// Remove one unit of the item with `id`.
    ///
    /// Unknown ids are a no-op. Returns true if a unit was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(quantity) = self.quantities.get_mut(id) else {
            tracing::debug!(item_id = id, "Remove ignored, item not in cart");
            return false;
        };

        *quantity -= 1;
        let remaining = *quantity;
        if remaining == 0 {
            self.quantities.remove(id);
            self.items.retain(|item| item.id.as_str() != id);
        }

        tracing::debug!(item_id = id, quantity = remaining, "Removed item from cart");
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.quantities.clear();
        self.items.clear();
        tracing::debug!("Cart cleared");
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Sum of `price * quantity` over every item, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines().map(|line| line.line_total()).sum()
    }

    /// [`CartLedger::total_price`] as a displayable price.
    #[must_use]
    pub fn subtotal(&self, currency: CurrencyCode) -> Price {
        Price::new(self.total_price(), currency)
    }

    /// Field-wise nutrition sum over every item.
    #[must_use]
    pub fn nutrition_totals(&self) -> NutritionalInfo {
        self.lines().map(|line| line.line_nutrition()).sum()
    }

    /// Quantity of the item with `id`, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.quantities.contains_key(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in the cart, in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Cart rows in first-added order.
    pub fn lines(&self) -> impl Iterator<Item = CartLine<'_>> {
        self.items.iter().map(|item| CartLine {
            item,
            quantity: self.quantity_of(item.id.as_str()),
        })
    }

    /// Serializable copy of the cart contents.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self
                .lines()
                .map(|line| SnapshotLine {
                    id: line.item.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }

    /// Rebuild a ledger from a snapshot, resolving ids against `catalog`.
    ///
    /// Lines whose id is no longer in the catalog, whose quantity is 0, or
    /// that would push a repeated id past `u32::MAX`, are skipped. Snapshot
    /// order is preserved.
    #[must_use]
    pub fn restore(snapshot: &CartSnapshot, catalog: &Catalog) -> Self {
        let mut ledger = Self::new();
        for line in &snapshot.lines {
            let Some(item) = catalog.get(line.id.as_str()) else {
                tracing::warn!(item_id = %line.id, "Skipping snapshot line for unknown item");
                continue;
            };
            if line.quantity == 0 {
                tracing::warn!(item_id = %line.id, "Skipping snapshot line with zero quantity");
                continue;
            }
            let current = ledger.quantity_of(line.id.as_str());
            let Some(quantity) = current.checked_add(line.quantity) else {
                tracing::warn!(item_id = %line.id, "Skipping snapshot line past the quantity limit");
                continue;
            };
            if current == 0 {
                ledger.items.push(item.clone());
            }
            ledger.quantities.insert(item.id.clone(), quantity);
        }
        ledger
    }
}

/// Persistable cart contents: ids and quantities only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<SnapshotLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub id: MenuItemId,
    pub quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use freshking_core::Category;

    use super::*;

    fn item(id: &str, price: &str, calories: i64) -> CatalogItem {
        CatalogItem {
            id: MenuItemId::new(id),
            name: format!("Item {id}"),
            description: String::new(),
            category: Category::Bowls,
            price: Decimal::from_str(price).unwrap(),
            image_url: None,
            nutrition: NutritionalInfo::from_whole(calories, 10, 20, 5, 2),
            dietary_tags: BTreeSet::new(),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        let cart = CartLedger::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert_eq!(cart.nutrition_totals(), NutritionalInfo::ZERO);
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let mut cart = CartLedger::new();
        let a = item("a", "10.00", 100);
        cart.add_item(&a);

        assert_eq!(cart.quantity_of("a"), 1);
        assert_eq!(cart.items(), &[a]);
    }

    #[test]
    fn test_add_existing_item_increments_without_duplicating() {
        let mut cart = CartLedger::new();
        let a = item("a", "10.00", 100);
        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.quantity_of("a"), 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_items_keep_first_added_order() {
        let mut cart = CartLedger::new();
        let (a, b, c) = (item("a", "1", 1), item("b", "1", 1), item("c", "1", 1));
        cart.add_item(&b);
        cart.add_item(&a);
        cart.add_item(&b);
        cart.add_item(&c);

        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_item(&item("a", "1.00", 1));
        let before = cart.clone();

        assert!(!cart.remove_item("zzz"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_to_zero_drops_item() {
        let mut cart = CartLedger::new();
        let (a, b) = (item("a", "1.00", 1), item("b", "2.00", 1));
        cart.add_item(&a);
        cart.add_item(&b);

        assert!(cart.remove_item("a"));
        assert!(!cart.contains("a"));
        assert_eq!(cart.quantity_of("a"), 0);
        assert_eq!(cart.items(), &[b]);

        // A second removal of the same id is now a no-op.
        assert!(!cart.remove_item("a"));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_readding_removed_item_goes_to_end() {
        let mut cart = CartLedger::new();
        let (a, b) = (item("a", "1.00", 1), item("b", "2.00", 1));
        cart.add_item(&a);
        cart.add_item(&b);
        cart.remove_item("a");
        cart.add_item(&a);

        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_example_scenario() {
        let mut cart = CartLedger::new();
        let a = item("a", "10.00", 100);
        let b = item("b", "5.50", 50);

        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);
        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), dec("25.50"));

        cart.remove_item("a");
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price(), dec("15.50"));
        assert_eq!(cart.quantity_of("a"), 1);

        cart.remove_item("a");
        assert!(cart.items().iter().all(|i| i.id.as_str() != "a"));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartLedger::new();
        cart.add_item(&item("a", "3.25", 10));
        cart.add_item(&item("b", "1.10", 10));
        cart.clear();

        assert_eq!(cart, CartLedger::new());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_total_price_is_exact() {
        let mut cart = CartLedger::new();
        let dime = item("dime", "0.10", 0);
        for _ in 0..3 {
            cart.add_item(&dime);
        }
        assert_eq!(cart.total_price(), dec("0.30"));
        assert_eq!(cart.subtotal(CurrencyCode::USD).display(), "$0.30");
    }

    #[test]
    fn test_nutrition_totals_scale_by_quantity() {
        let mut cart = CartLedger::new();
        let a = item("a", "1.00", 100);
        let b = item("b", "1.00", 40);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);

        let totals = cart.nutrition_totals();
        assert_eq!(totals, NutritionalInfo::from_whole(240, 30, 60, 15, 6));
    }

    #[test]
    fn test_lines() {
        let mut cart = CartLedger::new();
        let a = item("a", "2.25", 100);
        cart.add_item(&a);
        cart.add_item(&a);

        let line = cart.lines().next().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), dec("4.50"));
        assert_eq!(line.line_nutrition().calories, Decimal::from(200));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_malformed_item_is_ignored() {
        let mut cart = CartLedger::new();
        cart.add_item(&item("bad", "-1.00", 1));
        assert!(cart.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "malformed catalog item")]
    fn test_malformed_item_asserts_in_debug() {
        let mut cart = CartLedger::new();
        cart.add_item(&item("bad", "-1.00", 1));
    }

    #[test]
    fn test_snapshot_restore() {
        let catalog = Catalog::new(vec![item("a", "1.00", 1), item("b", "2.00", 2)]).unwrap();
        let mut cart = CartLedger::new();
        cart.add_item(catalog.get("b").unwrap());
        cart.add_item(catalog.get("a").unwrap());
        cart.add_item(catalog.get("b").unwrap());

        let snapshot = cart.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: CartSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(CartLedger::restore(&parsed, &catalog), cart);
    }

    fn single_line(id: &str, quantity: u32) -> SnapshotLine {
        SnapshotLine {
            id: MenuItemId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_add_at_quantity_limit_leaves_ledger_unchanged() {
        let catalog = Catalog::new(vec![item("a", "1.00", 1)]).unwrap();
        let snapshot = CartSnapshot {
            lines: vec![single_line("a", u32::MAX)],
        };
        let mut cart = CartLedger::restore(&snapshot, &catalog);
        let before = cart.clone();

        cart.add_item(catalog.get("a").unwrap());
        assert_eq!(cart, before);
        assert_eq!(cart.quantity_of("a"), u32::MAX);

        assert!(cart.remove_item("a"));
        cart.add_item(catalog.get("a").unwrap());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_restore_skips_line_past_quantity_limit() {
        let catalog = Catalog::new(vec![item("a", "1.00", 1)]).unwrap();
        let snapshot = CartSnapshot {
            lines: vec![single_line("a", u32::MAX - 1), single_line("a", 2)],
        };

        let cart = CartLedger::restore(&snapshot, &catalog);
        assert_eq!(cart.quantity_of("a"), u32::MAX - 1);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_totals_at_price_and_quantity_caps() {
        let mut priciest = item("gold", "1000000", 1);
        priciest.nutrition = NutritionalInfo::from_whole(1_000_000, 1_000_000, 0, 0, 0);
        let catalog = Catalog::new(vec![priciest, item("b", "999999.99", 1)]).unwrap();
        let snapshot = CartSnapshot {
            lines: vec![single_line("gold", u32::MAX), single_line("b", u32::MAX)],
        };

        let cart = CartLedger::restore(&snapshot, &catalog);
        let max_quantity = Decimal::from(u32::MAX);
        assert_eq!(
            cart.total_price(),
            dec("1000000") * max_quantity + dec("999999.99") * max_quantity
        );
        assert_eq!(
            cart.nutrition_totals().calories,
            dec("1000000") * max_quantity + max_quantity
        );
    }

    #[test]
    fn test_restore_skips_unknown_and_zero_lines() {
        let catalog = Catalog::new(vec![item("a", "1.00", 1)]).unwrap();
        let snapshot = CartSnapshot {
            lines: vec![
                SnapshotLine {
                    id: MenuItemId::new("gone"),
                    quantity: 3,
                },
                SnapshotLine {
                    id: MenuItemId::new("a"),
                    quantity: 0,
                },
            ],
        };

        let cart = CartLedger::restore(&snapshot, &catalog);
        assert!(cart.is_empty());
    }
}
