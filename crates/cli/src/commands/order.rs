//! Place a simulated order.
//!
//! Without card flags the order is paid with PayPal.

use freshking_storefront::checkout::{self, CheckoutForm, CheckoutStep, PaymentDetails};
use freshking_storefront::config::StorefrontConfig;
use freshking_storefront::error::Result;
use freshking_storefront::{Catalog, CheckoutSession};
use tracing::info;

use super::build_cart;

/// Card flags as given on the command line.
#[derive(Debug, Default)]
pub struct CardArgs {
    pub number: Option<String>,
    pub expiry: Option<String>,
    pub cvv: Option<String>,
}

impl CardArgs {
    /// Card details if any card flag was given, PayPal otherwise.
    #[must_use]
    pub fn into_payment(self) -> PaymentDetails {
        if self.number.is_none() && self.expiry.is_none() && self.cvv.is_none() {
            return PaymentDetails::PayPal;
        }
        PaymentDetails::card(
            self.number.as_deref().unwrap_or_default(),
            self.expiry.as_deref().unwrap_or_default(),
            self.cvv.as_deref().unwrap_or_default(),
        )
    }
}

/// Walk the checkout steps for `form`, then place the order for `ids`.
///
/// # Errors
///
/// Returns the first checkout validation error, or an error for unknown ids.
pub fn place(
    catalog: &Catalog,
    config: &StorefrontConfig,
    form: CheckoutForm,
    ids: &[String],
) -> Result<()> {
    let mut cart = build_cart(catalog, ids)?;

    let mut session = CheckoutSession::new(form);
    walk_checkout(&mut session)?;

    let confirmation = checkout::place_order(&session.form, &mut cart, config.currency)?;

    info!("Order Confirmed!");
    info!("  Order    {}", confirmation.order_id);
    info!("  Placed   {}", confirmation.placed_at.to_rfc3339());
    info!("  Email    {}", confirmation.email);
    info!("  Payment  {}", confirmation.payment_method);
    info!("  Items    {}", confirmation.summary.item_count);
    info!("  Total    {}", confirmation.summary.total.display());
    Ok(())
}

/// Validate each step from the current one to the last, returning the
/// steps completed in order.
fn walk_checkout(session: &mut CheckoutSession) -> Result<Vec<CheckoutStep>> {
    let mut completed = Vec::new();
    loop {
        let step = session.step();
        let next = session.advance()?;
        info!(step = %step, "Checkout step completed");
        completed.push(step);
        if next.is_none() {
            return Ok(completed);
        }
    }
}
