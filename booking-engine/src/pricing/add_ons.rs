//! Add-on total calculation
//!
//! Sums selected add-on line items (price × quantity). Pure; empty → 0.

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::AddOnSelection;

use super::money::{to_decimal, validate_price, validate_quantity};

/// Compute the total price of the selected add-ons.
///
/// Each selection must have `price >= 0` and `1 <= quantity`; malformed
/// input is rejected rather than clamped so the caller never persists a
/// booking built from bad numbers.
pub fn add_on_total(selections: &[AddOnSelection]) -> AppResult<Decimal> {
    let mut total = Decimal::ZERO;

    for selection in selections {
        validate_price(selection.price, "add_on.price")?;
        validate_quantity(selection.quantity, "add_on.quantity")?;

        total += to_decimal(selection.price) * Decimal::from(selection.quantity);
    }

    Ok(total)
}
