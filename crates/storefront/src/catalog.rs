//! Read-only menu catalog and menu-page filtering.
//!
//! The catalog is loaded once at startup, either from the bundled
//! `content/menu.json` or from a file named in configuration. Items are
//! validated on load so the cart never sees a malformed entry.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use freshking_core::{Category, DietaryFilter, MenuItemId, NutritionalInfo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

/// Bundled FreshKing menu.
const BUILTIN_MENU: &str = include_str!("../content/menu.json");

/// Largest accepted unit price.
///
/// With quantities bounded by `u32`, line totals and cart totals stay far
/// inside `Decimal` range.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted value for any single nutrition field.
pub const MAX_NUTRITION_VALUE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog item has an empty id")]
    EmptyId,
    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(MenuItemId),
    #[error("Catalog item {0} has a negative price")]
    NegativePrice(MenuItemId),
    #[error("Catalog item {0} has negative nutrition values")]
    NegativeNutrition(MenuItemId),
    #[error("Catalog item {0} has a price above {max}", max = MAX_UNIT_PRICE)]
    PriceTooLarge(MenuItemId),
    #[error("Catalog item {0} has a nutrition value above {max}", max = MAX_NUTRITION_VALUE)]
    NutritionTooLarge(MenuItemId),
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Unit price in the store currency.
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "nutritionalInfo")]
    pub nutrition: NutritionalInfo,
    #[serde(rename = "dietaryFilters", default)]
    pub dietary_tags: BTreeSet<DietaryFilter>,
}

impl CatalogItem {
    /// Returns true if the item carries the given dietary label.
    #[must_use]
    pub fn has_tag(&self, tag: DietaryFilter) -> bool {
        self.dietary_tags.contains(&tag)
    }

    /// Returns true if the item can be safely added to a cart.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(CatalogError::NegativePrice(self.id.clone()));
        }
        if self.price > MAX_UNIT_PRICE {
            return Err(CatalogError::PriceTooLarge(self.id.clone()));
        }
        if !self.nutrition.is_non_negative() {
            return Err(CatalogError::NegativeNutrition(self.id.clone()));
        }
        let n = &self.nutrition;
        if [n.calories, n.protein, n.carbs, n.fat, n.fiber]
            .iter()
            .any(|value| *value > MAX_NUTRITION_VALUE)
        {
            return Err(CatalogError::NutritionTooLarge(self.id.clone()));
        }
        Ok(())
    }
}

/// Menu page filter state.
///
/// `category: None` means "all". Every active dietary filter must be carried
/// by an item for it to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: Option<Category>,
    pub dietary: BTreeSet<DietaryFilter>,
}

impl MenuFilter {
    /// Filter showing every item.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Require a dietary label.
    #[must_use]
    pub fn with_dietary(mut self, filter: DietaryFilter) -> Self {
        self.dietary.insert(filter);
        self
    }

    /// Turn a dietary filter on if it is off, off if it is on.
    pub fn toggle_dietary(&mut self, filter: DietaryFilter) {
        if !self.dietary.remove(&filter) {
            self.dietary.insert(filter);
        }
    }

    /// Returns true if the item should be shown.
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let category_ok = self.category.is_none_or(|category| item.category == category);
        category_ok && self.dietary.iter().all(|tag| item.has_tag(*tag))
    }
}

/// The static list of purchasable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<MenuItemId, usize>,
}

impl Catalog {
    /// Build a catalog from items, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: empty or duplicate ids, or a
    /// price or nutrition value that is negative or above its cap.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or a validation error.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any error
    /// from [`Catalog::from_json_str`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The bundled FreshKing menu.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled menu file itself is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_MENU)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// All items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in one category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items matching the filter, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &MenuFilter) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}
