//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are accumulated as [`Decimal`] and only rounded when rendered,
//! so a cart of `3 x $0.10` always totals `$0.30`.

use core::fmt;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown for every supported currency.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// The amount rounded to display precision (half away from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.rounded();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{:.2}",
            self.currency_code.symbol(),
            rounded.abs()
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    /// Adds two prices. Both sides are expected to share a currency; the
    /// left-hand currency wins.
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn usd(s: &str) -> Price {
        Price::new(Decimal::from_str(s).unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(usd("25.5").display(), "$25.50");
        assert_eq!(usd("0").display(), "$0.00");
        assert_eq!(usd("12.99").display(), "$12.99");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(usd("1.005").display(), "$1.01");
        assert_eq!(usd("1.004").display(), "$1.00");
        assert_eq!(usd("-1.005").display(), "-$1.01");
    }

    #[test]
    fn test_accumulation_has_no_cent_drift() {
        let total = (0..3).fold(Price::zero(CurrencyCode::USD), |acc, _| acc + usd("0.10"));
        assert_eq!(total.amount, Decimal::from_str("0.30").unwrap());
        assert_eq!(total.display(), "$0.30");
    }

    #[test]
    fn test_currency_symbols() {
        let eur = Price::new(Decimal::new(450, 2), CurrencyCode::EUR);
        assert_eq!(eur.to_string(), "€4.50");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(CurrencyCode::from_str("usd").unwrap(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::from_str(" CAD ").unwrap(), CurrencyCode::CAD);
        assert!(CurrencyCode::from_str("JPY").is_err());
    }
}
