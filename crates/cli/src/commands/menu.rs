//! List menu items.
//!
//! # Usage
//!
//! ```bash
//! # Whole menu
//! fk-cli menu
//!
//! # Vegan soups only
//! fk-cli menu --category soups --vegan
//! ```

use freshking_core::{Category, DietaryFilter, Price};
use freshking_storefront::{Catalog, MenuFilter};
use freshking_storefront::config::StorefrontConfig;
use tracing::info;

/// Build the menu-page filter from command-line flags.
#[must_use]
pub fn build_filter(category: Option<Category>, vegan: bool, gluten_free: bool) -> MenuFilter {
    let mut filter = MenuFilter {
        category,
        ..MenuFilter::default()
    };
    if vegan {
        filter.toggle_dietary(DietaryFilter::Vegan);
    }
    if gluten_free {
        filter.toggle_dietary(DietaryFilter::GlutenFree);
    }
    filter
}

/// Log every item matching `filter`.
pub fn list(catalog: &Catalog, config: &StorefrontConfig, filter: &MenuFilter) {
    let items = catalog.filter(filter);
    info!(
        category = filter.category.map_or("all", |c| c.label()),
        matches = items.len(),
        "Menu"
    );

    for item in items {
        let tags: Vec<&str> = item.dietary_tags.iter().map(DietaryFilter::label).collect();
        info!(
            "  {:<12} {:<26} {:>8}  {}",
            item.id,
            item.name,
            Price::new(item.price, config.currency).display(),
            tags.join(", ")
        );
    }
}
