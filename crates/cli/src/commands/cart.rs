//! Build a cart and show its totals and nutrition report.

use std::io::Write;

use freshking_storefront::config::StorefrontConfig;
use freshking_storefront::error::{AppError, Result};
use freshking_storefront::{Catalog, DailyValues, NutritionReport, OrderSummary};
use tracing::info;

use super::build_cart;

/// Add `ids` to a fresh cart and log the order summary and nutrition report.
///
/// With `json`, the summary and report are written to stdout as one JSON
/// document instead, outside the log stream.
///
/// # Errors
///
/// Returns an error for unknown ids or if the report cannot be serialized.
pub fn show(catalog: &Catalog, config: &StorefrontConfig, ids: &[String], json: bool) -> Result<()> {
    let cart = build_cart(catalog, ids)?;
    let summary = OrderSummary::from_cart(&cart, config.currency);
    let report = NutritionReport::from_cart(&cart, &DailyValues::STANDARD);

    if json {
        return write_json(&mut std::io::stdout().lock(), &summary, &report);
    }

    info!(items = summary.item_count, "Cart");
    for line in &summary.lines {
        info!(
            "  {:>2} x {:<26} {:>8}",
            line.quantity,
            line.name,
            line.line_total.display()
        );
    }
    info!("  Subtotal {}", summary.subtotal.display());
    info!("  Shipping {}", summary.shipping_label());
    info!("  Total    {}", summary.total.display());

    let totals = &report.totals;
    let pct = &report.percent_daily;
    info!("Nutrition (based on a 2,000 cal daily diet)");
    info!("  Calories {} cal ({:.0}%)", totals.calories, pct.calories);
    info!("  Protein  {} g ({:.0}%)", totals.protein, pct.protein);
    info!("  Carbs    {} g ({:.0}%)", totals.carbs, pct.carbs);
    info!("  Fat      {} g ({:.0}%)", totals.fat, pct.fat);
    info!("  Fiber    {} g ({:.0}%)", totals.fiber, pct.fiber);
    for item in &report.breakdown {
        info!(
            "  {} x{}: {} cal",
            item.name, item.quantity, item.nutrition.calories
        );
    }

    Ok(())
}

/// Write `{"summary": ..., "nutrition": ...}` to `out`, newline terminated.
fn write_json(out: &mut impl Write, summary: &OrderSummary, report: &NutritionReport) -> Result<()> {
    let body = serde_json::json!({ "summary": summary, "nutrition": report });
    serde_json::to_writer_pretty(&mut *out, &body)
        .map_err(|e| AppError::BadRequest(format!("failed to render report: {e}")))?;
    writeln!(out).map_err(|e| AppError::BadRequest(format!("failed to write report: {e}")))
}
