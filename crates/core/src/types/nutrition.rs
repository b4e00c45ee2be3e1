//! Nutritional values for menu items.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nutrition facts for one serving.
///
/// Calories are in kcal, everything else in grams. Values are decimals so
/// that per-item and per-cart sums are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fat: Decimal,
    pub fiber: Decimal,
}

impl NutritionalInfo {
    /// All fields zero.
    pub const ZERO: Self = Self {
        calories: Decimal::ZERO,
        protein: Decimal::ZERO,
        carbs: Decimal::ZERO,
        fat: Decimal::ZERO,
        fiber: Decimal::ZERO,
    };

    /// Create nutrition facts from whole-number values.
    #[must_use]
    pub fn from_whole(calories: i64, protein: i64, carbs: i64, fat: i64, fiber: i64) -> Self {
        Self {
            calories: Decimal::from(calories),
            protein: Decimal::from(protein),
            carbs: Decimal::from(carbs),
            fat: Decimal::from(fat),
            fiber: Decimal::from(fiber),
        }
    }

    /// Every field multiplied by `quantity`.
    #[must_use]
    pub fn scaled(&self, quantity: u32) -> Self {
        let factor = Decimal::from(quantity);
        self.map(|value| value * factor)
    }

    /// Apply `f` to every field independently.
    #[must_use]
    pub fn map(&self, f: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
            fiber: f(self.fiber),
        }
    }

    /// Returns true if no field is negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
        ]
        .iter()
        .all(|value| !value.is_sign_negative() || value.is_zero())
    }
}

impl Add for NutritionalInfo {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for NutritionalInfo {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionalInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
