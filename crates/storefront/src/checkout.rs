//! Multi-step checkout: form validation, order summary and order placement.
//!
//! Checkout walks through three steps (personal information, shipping
//! address, payment). Each step must validate before the next one opens.
//! Payment is simulated: placing an order validates the form, snapshots the
//! cart into an [`OrderSummary`] and clears the cart.

use chrono::{DateTime, Utc};
use freshking_core::{CurrencyCode, Email, EmailError, MenuItemId, PaymentMethod, Price};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::cart::CartLedger;

/// Checkout validation and placement errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cannot check out an empty cart")]
    EmptyCart,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("Invalid payment details: {0}")]
    InvalidPayment(&'static str),
    #[error("Checkout step {0} has not been reached yet")]
    StepNotReached(CheckoutStep),
}

/// A checkout form step, in the order they are completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
pub enum CheckoutStep {
    #[default]
    PersonalInfo,
    ShippingAddress,
    Payment,
}

impl CheckoutStep {
    pub const ALL: [Self; 3] = [Self::PersonalInfo, Self::ShippingAddress, Self::Payment];

    /// The step after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::ShippingAddress),
            Self::ShippingAddress => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    /// 1-based position shown in the step header.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::ShippingAddress => 2,
            Self::Payment => 3,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::ShippingAddress => "Shipping Address",
            Self::Payment => "Payment Information",
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

/// Payment details entered on the last step.
///
/// Card number and CVV are kept in [`SecretString`] so they never show up in
/// `Debug` output or logs.
#[derive(Debug)]
pub enum PaymentDetails {
    Card {
        card_number: SecretString,
        /// `MM/YY`
        expiry: String,
        cvv: SecretString,
    },
    PayPal,
}

impl PaymentDetails {
    /// Card payment details.
    #[must_use]
    pub fn card(card_number: &str, expiry: &str, cvv: &str) -> Self {
        Self::Card {
            card_number: SecretString::from(card_number.to_owned()),
            expiry: expiry.to_owned(),
            cvv: SecretString::from(cvv.to_owned()),
        }
    }

    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Card { .. } => PaymentMethod::Card,
            Self::PayPal => PaymentMethod::PayPal,
        }
    }

    fn validate(&self) -> Result<(), CheckoutError> {
        let Self::Card {
            card_number,
            expiry,
            cvv,
        } = self
        else {
            return Ok(());
        };

        let card_number = card_number.expose_secret();
        require("cardNumber", card_number)?;
        require("expiryDate", expiry)?;
        require("cvv", cvv.expose_secret())?;

        let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidPayment("card number must be 12-19 digits"));
        }
        if !is_valid_expiry(expiry.trim()) {
            return Err(CheckoutError::InvalidPayment("expiry date must be MM/YY"));
        }
        let cvv = cvv.expose_secret().trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidPayment("CVV must be 3 or 4 digits"));
        }
        Ok(())
    }
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self::card("", "", "")
    }
}

/// `MM/YY` with a month between 01 and 12.
fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    two_digits(month)
        && two_digits(year)
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

fn require(field: &'static str, value: &str) -> Result<(), CheckoutError> {
    if value.trim().is_empty() {
        Err(CheckoutError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Everything the customer types into the checkout form.
#[derive(Debug, Default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub payment: PaymentDetails,
}

impl CheckoutForm {
    /// Validate the fields belonging to one step.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field of that step.
    pub fn validate_step(&self, step: CheckoutStep) -> Result<(), CheckoutError> {
        match step {
            CheckoutStep::PersonalInfo => {
                require("firstName", &self.first_name)?;
                require("lastName", &self.last_name)?;
                require("email", &self.email)?;
                Email::parse(&self.email)?;
                Ok(())
            }
            CheckoutStep::ShippingAddress => {
                require("address", &self.address)?;
                require("city", &self.city)?;
                require("zipCode", &self.zip_code)
            }
            CheckoutStep::Payment => self.payment.validate(),
        }
    }

    /// Validate every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first error found, earliest step first.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        CheckoutStep::ALL
            .into_iter()
            .try_for_each(|step| self.validate_step(step))
    }
}

/// Step navigation over a checkout form.
///
/// Steps open in order; a step can be revisited once it has been reached.
#[derive(Debug, Default)]
pub struct CheckoutSession {
    pub form: CheckoutForm,
    step: CheckoutStep,
    furthest: CheckoutStep,
}

impl CheckoutSession {
    #[must_use]
    pub fn new(form: CheckoutForm) -> Self {
        Self {
            form,
            step: CheckoutStep::PersonalInfo,
            furthest: CheckoutStep::PersonalInfo,
        }
    }

    /// The step currently open.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The furthest step opened so far.
    #[must_use]
    pub const fn furthest(&self) -> CheckoutStep {
        self.furthest
    }

    /// Validate the open step and move to the next one.
    ///
    /// Returns the newly opened step, or `None` when the payment step has
    /// validated and the order can be placed.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the open step; the step does not change.
    pub fn advance(&mut self) -> Result<Option<CheckoutStep>, CheckoutError> {
        let current = self.step();
        self.form.validate_step(current)?;

        let next = current.next();
        if let Some(next) = next {
            self.step = next;
            self.furthest = self.furthest.max(next);
        }
        Ok(next)
    }

    /// Jump to a step that has already been reached.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::StepNotReached` for steps beyond the furthest one.
    pub fn go_to(&mut self, step: CheckoutStep) -> Result<(), CheckoutError> {
        if step > self.furthest() {
            return Err(CheckoutError::StepNotReached(step));
        }
        self.step = step;
        Ok(())
    }
}

/// One row of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// Order summary panel shown beside the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub item_count: u64,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Summarize the cart. Shipping is always free.
    #[must_use]
    pub fn from_cart(cart: &CartLedger, currency: CurrencyCode) -> Self {
        let lines = cart
            .lines()
            .map(|line| OrderLine {
                id: line.item.id.clone(),
                name: line.item.name.clone(),
                quantity: line.quantity,
                unit_price: Price::new(line.item.price, currency),
                line_total: Price::new(line.line_total(), currency),
            })
            .collect();
        let subtotal = cart.subtotal(currency);
        let shipping = Price::zero(currency);

        Self {
            lines,
            item_count: cart.total_item_count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Label for the shipping row.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}

/// Result of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub email: Email,
    pub payment_method: PaymentMethod,
    pub summary: OrderSummary,
}

/// Validate the form, place a simulated order and clear the cart.
///
/// The cart is left untouched when any check fails.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` for an empty cart, otherwise the first
/// form validation error.
#[instrument(skip_all, fields(items = cart.total_item_count()))]
pub fn place_order(
    form: &CheckoutForm,
    cart: &mut CartLedger,
    currency: CurrencyCode,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    form.validate()?;
    let email = Email::parse(&form.email)?;

    let summary = OrderSummary::from_cart(cart, currency);
    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        email,
        payment_method: form.payment.method(),
        summary,
    };
    cart.clear();

    tracing::info!(
        order_id = %confirmation.order_id,
        total = %confirmation.summary.total,
        payment_method = %confirmation.payment_method,
        "Order placed"
    );
    Ok(confirmation)
}
