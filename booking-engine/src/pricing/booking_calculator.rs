//! Booking total composition
//!
//! Derives the full [`BookingPriceBreakdown`] from a listing, a booking
//! request, and an optional coupon. Steps, in order: validate inputs,
//! base price (with the weekly day multiplier), add-ons, customizations,
//! subtotal, delivery charge, coupon discount, floor at zero.
//!
//! Coupon rejection is non-fatal: the breakdown is still produced with a
//! zero discount and the rejection reason is returned alongside it.
//! Malformed inputs are fatal; nothing may persist a booking built from
//! bad numbers.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AddOnSelection, BookingPriceBreakdown, BookingRequest, Coupon, Tiffin, WeeklyCustomization,
};

use super::add_ons::add_on_total;
use super::coupon::{CouponRejection, apply_coupon, validate_coupon_amounts};
use super::customizations::customization_total;
use super::delivery::delivery_charge;
use super::money::{to_decimal, to_f64, validate_price, validate_quantity};
use crate::config::EngineConfig;

/// Result of pricing a booking request
#[derive(Debug, Clone)]
pub struct PricingOutcome {
    /// The complete breakdown (what gets persisted and displayed)
    pub breakdown: BookingPriceBreakdown,
    /// Why the coupon was not applied, if one was requested and rejected
    pub coupon_rejection: Option<CouponRejection>,
}

/// Compute the total price for a booking request against a listing.
///
/// `coupon` is the resolved coupon for the request's code, if any;
/// `None` with a requested code means the lookup found nothing.
/// `now` is UTC millis. `delivery_charge_override` replaces the
/// configured flat charge when the caller (e.g. a seller-specific zone
/// rule) supplies one; the weekly/monthly waiver still applies.
pub fn compute_booking_total(
    tiffin: &Tiffin,
    request: &BookingRequest,
    coupon: Option<&Coupon>,
    delivery_charge_override: Option<f64>,
    now: i64,
    config: &EngineConfig,
) -> AppResult<PricingOutcome> {
    // 1. Listing must be active and carry a sane price
    if !tiffin.is_active {
        return Err(AppError::new(ErrorCode::TiffinInactive));
    }
    if validate_price(tiffin.price, "tiffin.price").is_err() {
        return Err(
            AppError::new(ErrorCode::TiffinInvalidPrice).with_detail("price", tiffin.price)
        );
    }

    // 2. Validate quantity
    validate_quantity(request.quantity, "quantity")?;

    // 3. Selected days must be delivery days of the listing
    for day in &request.selected_days {
        if !tiffin.available_days.contains(day) {
            return Err(AppError::with_message(
                ErrorCode::BookingInvalidDays,
                format!("{} is not a delivery day for this listing", day.short_name()),
            )
            .with_detail("day", day.short_name()));
        }
    }

    // 4. Resolve add-on choices against the published list
    let add_ons = resolve_add_ons(tiffin, request)?;

    // 5. Resolve customization choices (snapshots)
    let customizations = resolve_customizations(tiffin, request)?;

    // 6. Base price: listing price × quantity, × selected day count for
    //    weekly plans (single/trial/monthly do not multiply by day count)
    let day_multiplier = request
        .booking_type
        .day_multiplier(request.selected_days.len());
    let base_price = to_decimal(tiffin.price)
        * Decimal::from(request.quantity)
        * Decimal::from(day_multiplier as u64);

    // 7. Component totals
    let add_ons_price = add_on_total(&add_ons)?;
    let customizations_price = customization_total(
        &customizations,
        &request.selected_days,
        config.empty_day_policy,
    )?;

    let subtotal = base_price + add_ons_price + customizations_price;

    // 8. Delivery charge (waived for weekly/monthly even when overridden)
    let delivery = match delivery_charge_override {
        Some(charge) => {
            validate_price(charge, "delivery_charge_override")?;
            if request.booking_type.waives_delivery_charge() {
                Decimal::ZERO
            } else {
                to_decimal(charge)
            }
        }
        None => delivery_charge(request.booking_type, config),
    };

    // 9. Coupon discount on the subtotal (delivery charge excluded).
    //    Malformed coupon amounts are fatal; only business-rule failures
    //    downgrade to a non-fatal rejection.
    let (discount, coupon_code, coupon_rejection) = match (coupon, &request.coupon_code) {
        (Some(coupon), _) => {
            validate_coupon_amounts(coupon)?;
            match apply_coupon(coupon, subtotal, now) {
                Ok(discount) => (discount, Some(coupon.code.clone()), None),
                Err(rejection) => (Decimal::ZERO, None, Some(rejection)),
            }
        }
        (None, Some(_)) => (Decimal::ZERO, None, Some(CouponRejection::NotFound)),
        (None, None) => (Decimal::ZERO, None, None),
    };

    // 10. Final total, floored at zero
    let total = (subtotal + delivery - discount).max(Decimal::ZERO);

    Ok(PricingOutcome {
        breakdown: BookingPriceBreakdown {
            base_price: to_f64(base_price),
            add_ons_price: to_f64(add_ons_price),
            customizations_price: to_f64(customizations_price),
            subtotal: to_f64(subtotal),
            delivery_charge: to_f64(delivery),
            discount_amount: to_f64(discount),
            coupon_code,
            total: to_f64(total),
            add_ons,
            customizations,
        },
        coupon_rejection,
    })
}

/// Resolve the request's add-on choices into priced line items
fn resolve_add_ons(tiffin: &Tiffin, request: &BookingRequest) -> AppResult<Vec<AddOnSelection>> {
    let mut selections = Vec::with_capacity(request.add_ons.len());

    for choice in &request.add_ons {
        let add_on = tiffin.find_add_on(&choice.name).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::AddOnNotFound,
                format!("Add-on '{}' is not offered on this listing", choice.name),
            )
            .with_detail("add_on", choice.name.clone())
        })?;

        selections.push(AddOnSelection {
            name: add_on.name.clone(),
            price: add_on.price,
            quantity: choice.quantity,
        });
    }

    Ok(selections)
}

/// Resolve the request's customization names into snapshots
fn resolve_customizations(
    tiffin: &Tiffin,
    request: &BookingRequest,
) -> AppResult<Vec<WeeklyCustomization>> {
    let mut snapshots = Vec::with_capacity(request.customizations.len());

    for name in &request.customizations {
        let customization = tiffin.find_customization(name).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CustomizationNotFound,
                format!("Customization '{}' is not offered on this listing", name),
            )
            .with_detail("customization", name.clone())
        })?;

        if !customization.is_available {
            return Err(AppError::with_message(
                ErrorCode::CustomizationUnavailable,
                format!("Customization '{}' is currently unavailable", name),
            )
            .with_detail("customization", name.clone()));
        }

        snapshots.push(customization.clone());
    }

    Ok(snapshots)
}
