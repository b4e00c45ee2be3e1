//! Integration tests for the cart ledger against the bundled menu.

use std::str::FromStr;

use freshking_core::{CurrencyCode, NutritionalInfo};
use freshking_integration_tests::test_item;
use freshking_storefront::{CartLedger, CartSnapshot, Catalog, DailyValues, NutritionReport};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal")
}

// =============================================================================
// Worked Scenarios
// =============================================================================

#[test]
fn test_add_remove_scenario() {
    let mut cart = CartLedger::new();
    let a = test_item("a", 1000, 100);
    let b = test_item("b", 550, 50);

    cart.add_item(&a);
    cart.add_item(&a);
    cart.add_item(&b);
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price(), dec("25.50"));

    cart.remove_item("a");
    assert_eq!(cart.total_item_count(), 2);
    assert_eq!(cart.total_price(), dec("15.50"));
    assert!(cart.contains("a"));
    assert_eq!(cart.quantity_of("a"), 1);

    cart.remove_item("a");
    assert!(!cart.items().iter().any(|item| item.id.as_str() == "a"));
    assert_eq!(cart.total_item_count(), 1);
}

#[test]
fn test_clear_scenario() {
    let catalog = Catalog::builtin().expect("bundled menu");
    let mut cart = CartLedger::new();
    for id in ["main-1", "main-2", "main-1", "snack-1"] {
        cart.add_item(catalog.get(id).expect("on menu"));
    }
    cart.remove_item("main-2");

    cart.clear();
    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(cart.total_price(), Decimal::ZERO);
    assert!(cart.items().is_empty());
    assert_eq!(cart.nutrition_totals(), NutritionalInfo::ZERO);
}

// =============================================================================
// Bundled Menu
// =============================================================================

#[test]
fn test_full_menu_once_each() {
    let catalog = Catalog::builtin().expect("bundled menu");
    let mut cart = CartLedger::new();
    for item in catalog.items() {
        cart.add_item(item);
    }

    assert_eq!(cart.total_item_count(), 14);
    // Sum of every menu price.
    assert_eq!(cart.total_price(), dec("153.86"));
    assert_eq!(cart.subtotal(CurrencyCode::USD).display(), "$153.86");

    let ids: Vec<_> = cart.items().iter().map(|item| item.id.clone()).collect();
    let menu_ids: Vec<_> = catalog.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, menu_ids);
}

#[test]
fn test_cart_feeds_nutrition_report() {
    let catalog = Catalog::builtin().expect("bundled menu");
    let mut cart = CartLedger::new();
    let smoothie = catalog.get("smoothie-1").expect("on menu");
    for _ in 0..4 {
        cart.add_item(smoothie);
    }

    let report = NutritionReport::from_cart(&cart, &DailyValues::STANDARD);
    // 4 x 240 cal = 960 cal = 48% of 2000.
    assert_eq!(report.totals.calories, Decimal::from(960));
    assert_eq!(report.percent_daily.calories, Decimal::from(48));
    assert_eq!(report.breakdown.len(), 1);
}

#[test]
fn test_snapshot_survives_json_round_trip() {
    let catalog = Catalog::builtin().expect("bundled menu");
    let mut cart = CartLedger::new();
    for id in ["salad-2", "soup-1", "salad-2"] {
        cart.add_item(catalog.get(id).expect("on menu"));
    }

    let json = serde_json::to_string(&cart.snapshot()).expect("serialize");
    let snapshot: CartSnapshot = serde_json::from_str(&json).expect("deserialize");
    let restored = CartLedger::restore(&snapshot, &catalog);

    assert_eq!(restored, cart);
    assert_eq!(restored.total_price(), dec("32.97"));
}
