//! Menu classification enums.
//!
//! Serialized names match the labels shown on the menu page so catalog JSON
//! reads naturally (`"Main Meals"`, `"Gluten-Free"`).

use serde::{Deserialize, Serialize};

/// Normalize user input for case- and separator-insensitive parsing.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Bowls,
    Sandwiches,
    Soups,
    #[serde(rename = "Main Meals")]
    MainMeals,
    Salads,
    Smoothies,
    Snacks,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 7] = [
        Self::Bowls,
        Self::Sandwiches,
        Self::Soups,
        Self::MainMeals,
        Self::Salads,
        Self::Smoothies,
        Self::Snacks,
    ];

    /// Label shown on the menu page.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bowls => "Bowls",
            Self::Sandwiches => "Sandwiches",
            Self::Soups => "Soups",
            Self::MainMeals => "Main Meals",
            Self::Salads => "Salads",
            Self::Smoothies => "Smoothies",
            Self::Snacks => "Snacks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|category| normalize(category.label()) == wanted)
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Dietary label an item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietaryFilter {
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
}

impl DietaryFilter {
    /// All dietary filters offered on the menu page.
    pub const ALL: [Self; 2] = [Self::Vegan, Self::GlutenFree];

    /// Label shown on the menu page.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten-Free",
        }
    }
}

impl std::fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DietaryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|filter| normalize(filter.label()) == wanted)
            .ok_or_else(|| format!("invalid dietary filter: {s}"))
    }
}

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::PayPal => write!(f, "paypal"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::PayPal),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
