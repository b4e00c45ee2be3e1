//! Nutrition analysis of the current cart.
//!
//! Builds the numbers behind the nutrition dashboard: cart totals, the share
//! of a reference daily intake they represent, the macro split and a
//! per-item breakdown.

use freshking_core::{MenuItemId, NutritionalInfo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartLedger;

/// Reference daily intake used for percentage-of-daily-value figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyValues(pub NutritionalInfo);

impl DailyValues {
    /// Reference values for a 2,000 calorie diet.
    pub const STANDARD: Self = Self(NutritionalInfo {
        calories: Decimal::from_parts(2000, 0, 0, false, 0),
        protein: Decimal::from_parts(50, 0, 0, false, 0),
        carbs: Decimal::from_parts(275, 0, 0, false, 0),
        fat: Decimal::from_parts(78, 0, 0, false, 0),
        fiber: Decimal::from_parts(28, 0, 0, false, 0),
    });

    /// Each field of `totals` as a percentage of the reference value.
    ///
    /// A zero reference value yields 0% rather than dividing by zero.
    #[must_use]
    pub fn percent_of(&self, totals: &NutritionalInfo) -> NutritionalInfo {
        let hundred = Decimal::ONE_HUNDRED;
        let pct = |total: Decimal, reference: Decimal| {
            total
                .checked_div(reference)
                .map_or(Decimal::ZERO, |ratio| ratio * hundred)
        };
        let reference = &self.0;
        NutritionalInfo {
            calories: pct(totals.calories, reference.calories),
            protein: pct(totals.protein, reference.protein),
            carbs: pct(totals.carbs, reference.carbs),
            fat: pct(totals.fat, reference.fat),
            fiber: pct(totals.fiber, reference.fiber),
        }
    }
}

impl Default for DailyValues {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One bar of the macro chart, in grams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroShare {
    pub name: &'static str,
    pub grams: Decimal,
}

/// Nutrition contributed by one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemBreakdown {
    pub id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    /// Already multiplied by `quantity`.
    pub nutrition: NutritionalInfo,
}

/// Everything the nutrition dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionReport {
    pub totals: NutritionalInfo,
    pub percent_daily: NutritionalInfo,
    pub macros: Vec<MacroShare>,
    pub breakdown: Vec<ItemBreakdown>,
}

impl NutritionReport {
    /// Analyse the cart against a daily reference intake.
    #[must_use]
    pub fn from_cart(cart: &CartLedger, daily: &DailyValues) -> Self {
        let totals = cart.nutrition_totals();
        let macros = vec![
            MacroShare {
                name: "Protein",
                grams: totals.protein,
            },
            MacroShare {
                name: "Carbs",
                grams: totals.carbs,
            },
            MacroShare {
                name: "Fat",
                grams: totals.fat,
            },
            MacroShare {
                name: "Fiber",
                grams: totals.fiber,
            },
        ];
        let breakdown = cart
            .lines()
            .map(|line| ItemBreakdown {
                id: line.item.id.clone(),
                name: line.item.name.clone(),
                quantity: line.quantity,
                nutrition: line.line_nutrition(),
            })
            .collect();

        Self {
            totals,
            percent_daily: daily.percent_of(&totals),
            macros,
            breakdown,
        }
    }
}
