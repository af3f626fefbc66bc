//! Weekly customization total calculation
//!
//! Each customization costs `price` once per applicable day, where the
//! applicable days are the intersection of the customization's configured
//! days with the booking's selected days. Day-set intersection is computed
//! by membership tests, so the result cannot depend on input ordering.

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::WeeklyCustomization;
use shared::types::{DayOfWeek, count_common_days, count_distinct_days};

use super::money::{to_decimal, validate_price};
use crate::config::EmptyDayPolicy;

/// Compute the total cost of the selected weekly customizations.
///
/// When `selected_days` is empty the behavior depends on the policy:
/// - [`EmptyDayPolicy::FullAvailability`] prices each customization over
///   its full configured day list (the original product behavior).
/// - [`EmptyDayPolicy::NoDays`] treats an empty selection as zero
///   applicable days.
pub fn customization_total(
    customizations: &[WeeklyCustomization],
    selected_days: &[DayOfWeek],
    empty_day_policy: EmptyDayPolicy,
) -> AppResult<Decimal> {
    let mut total = Decimal::ZERO;

    for customization in customizations {
        validate_price(customization.price, "customization.price")?;

        let applicable_days = if selected_days.is_empty() {
            match empty_day_policy {
                EmptyDayPolicy::FullAvailability => count_distinct_days(&customization.days),
                EmptyDayPolicy::NoDays => 0,
            }
        } else {
            count_common_days(&customization.days, selected_days)
        };

        total += to_decimal(customization.price) * Decimal::from(applicable_days as u32);
    }

    Ok(total)
}
