//! Coupon validation and discount calculation
//!
//! Validation short-circuits on the first failing condition, in a fixed
//! priority order, so exactly one rejection reason is ever reported:
//! 1. active flag → 2. validity window → 3. usage limit → 4. order minimum.
//!
//! Discount computation never exceeds the order amount (fixed) and never
//! exceeds the configured cap (percentage).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppResult, ErrorCode};
use shared::models::{Coupon, DiscountType};
use thiserror::Error;

use super::money::{to_decimal, validate_price};

/// Reason a coupon was rejected
///
/// Rejection is non-fatal for quoting: the booking proceeds without a
/// discount and the reason is surfaced to the customer.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponRejection {
    #[error("Coupon not found")]
    NotFound,
    #[error("Coupon is inactive")]
    Inactive,
    #[error("Coupon is not yet valid")]
    NotYetValid,
    #[error("Coupon has expired")]
    Expired,
    #[error("Coupon usage limit reached")]
    LimitReached,
    #[error("Order amount below coupon minimum")]
    BelowMinimum,
}

impl CouponRejection {
    /// Map to the platform error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound => ErrorCode::CouponNotFound,
            Self::Inactive => ErrorCode::CouponInactive,
            Self::NotYetValid => ErrorCode::CouponNotYetValid,
            Self::Expired => ErrorCode::CouponExpired,
            Self::LimitReached => ErrorCode::CouponLimitReached,
            Self::BelowMinimum => ErrorCode::CouponBelowMinimum,
        }
    }
}

/// Validate the coupon's monetary fields.
///
/// Malformed numbers (negative, NaN, out of range) are fatal errors, not
/// rejections: a rejection quotes the booking without a discount, whereas
/// a bad `discount_value` would silently produce a wrong total.
pub fn validate_coupon_amounts(coupon: &Coupon) -> AppResult<()> {
    validate_price(coupon.discount_value, "coupon.discount_value")?;
    validate_price(coupon.min_order_amount, "coupon.min_order_amount")?;
    if let Some(cap) = coupon.max_discount_amount {
        validate_price(cap, "coupon.max_discount_amount")?;
    }
    Ok(())
}

/// Validate a coupon against an order amount at a point in time.
///
/// `order_amount` is the booking subtotal (base + add-ons + customizations,
/// before the delivery charge). `now` is UTC millis.
pub fn validate_coupon(
    coupon: &Coupon,
    order_amount: Decimal,
    now: i64,
) -> Result<(), CouponRejection> {
    // 1. Active flag
    if !coupon.is_active {
        return Err(CouponRejection::Inactive);
    }

    // 2. Validity window
    if now < coupon.valid_from {
        return Err(CouponRejection::NotYetValid);
    }
    if now > coupon.valid_until {
        return Err(CouponRejection::Expired);
    }

    // 3. Usage limit (checked regardless of is_active)
    if coupon.is_exhausted() {
        return Err(CouponRejection::LimitReached);
    }

    // 4. Order minimum
    if order_amount < to_decimal(coupon.min_order_amount) {
        return Err(CouponRejection::BelowMinimum);
    }

    Ok(())
}

/// Compute the discount amount for a valid coupon.
///
/// - Fixed: `min(discount_value, order_amount)` — never exceeds the order.
/// - Percentage: `order_amount * discount_value / 100`, capped at
///   `max_discount_amount` when set.
pub fn compute_discount(coupon: &Coupon, order_amount: Decimal) -> Decimal {
    match coupon.discount_type {
        DiscountType::Fixed => to_decimal(coupon.discount_value).min(order_amount),
        DiscountType::Percentage => {
            let raw = order_amount * to_decimal(coupon.discount_value) / Decimal::ONE_HUNDRED;
            match coupon.max_discount_amount {
                Some(cap) => raw.min(to_decimal(cap)),
                None => raw,
            }
        }
    }
}

/// Validate and, if valid, compute the discount in one step
pub fn apply_coupon(
    coupon: &Coupon,
    order_amount: Decimal,
    now: i64,
) -> Result<Decimal, CouponRejection> {
    validate_coupon(coupon, order_amount, now)?;
    Ok(compute_discount(coupon, order_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::money::to_f64;

    const NOW: i64 = 1_700_000_000_000;

    fn make_coupon(discount_type: DiscountType, value: f64) -> Coupon {
        Coupon {
            id: None,
            code: "WELCOME10".to_string(),
            description: None,
            discount_type,
            discount_value: value,
            min_order_amount: 0.0,
            max_discount_amount: None,
            valid_from: NOW - 1_000,
            valid_until: NOW + 1_000,
            usage_limit: 100,
            used_count: 0,
            is_active: true,
            created_by: None,
            created_at: NOW - 1_000,
        }
    }

    // ==================== Amount Validation Tests ====================

    #[test]
    fn test_amounts_accepted() {
        let mut coupon = make_coupon(DiscountType::Percentage, 10.0);
        coupon.min_order_amount = 100.0;
        coupon.max_discount_amount = Some(50.0);
        assert!(validate_coupon_amounts(&coupon).is_ok());
    }

    #[test]
    fn test_negative_discount_value_rejected() {
        let coupon = make_coupon(DiscountType::Fixed, -50.0);
        assert!(validate_coupon_amounts(&coupon).is_err());
    }

    #[test]
    fn test_nan_discount_value_rejected() {
        let coupon = make_coupon(DiscountType::Fixed, f64::NAN);
        assert!(validate_coupon_amounts(&coupon).is_err());
    }

    #[test]
    fn test_bad_minimum_and_cap_rejected() {
        let mut coupon = make_coupon(DiscountType::Percentage, 10.0);
        coupon.min_order_amount = -1.0;
        assert!(validate_coupon_amounts(&coupon).is_err());

        coupon.min_order_amount = 0.0;
        coupon.max_discount_amount = Some(f64::INFINITY);
        assert!(validate_coupon_amounts(&coupon).is_err());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_coupon_passes() {
        let coupon = make_coupon(DiscountType::Fixed, 50.0);
        assert!(validate_coupon(&coupon, to_decimal(500.0), NOW).is_ok());
    }

    #[test]
    fn test_inactive_rejected_first() {
        // Inactive AND expired AND exhausted: the active flag wins
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.is_active = false;
        coupon.valid_until = NOW - 10;
        coupon.used_count = coupon.usage_limit;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(500.0), NOW),
            Err(CouponRejection::Inactive)
        );
    }

    #[test]
    fn test_not_yet_valid() {
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.valid_from = NOW + 60_000;
        coupon.valid_until = NOW + 120_000;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(500.0), NOW),
            Err(CouponRejection::NotYetValid)
        );
    }

    #[test]
    fn test_expired() {
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.valid_until = NOW - 10;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(500.0), NOW),
            Err(CouponRejection::Expired)
        );
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.valid_from = NOW;
        coupon.valid_until = NOW;

        assert!(validate_coupon(&coupon, to_decimal(500.0), NOW).is_ok());
    }

    #[test]
    fn test_limit_reached_overrides_is_active() {
        // usage_limit=5, used_count=5 → LIMIT_REACHED even with is_active=true
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.usage_limit = 5;
        coupon.used_count = 5;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(500.0), NOW),
            Err(CouponRejection::LimitReached)
        );
    }

    #[test]
    fn test_below_minimum() {
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.min_order_amount = 300.0;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(299.99), NOW),
            Err(CouponRejection::BelowMinimum)
        );
        assert!(validate_coupon(&coupon, to_decimal(300.0), NOW).is_ok());
    }

    #[test]
    fn test_rejection_priority_order() {
        // Expired AND exhausted AND below minimum: window check wins
        let mut coupon = make_coupon(DiscountType::Fixed, 50.0);
        coupon.valid_until = NOW - 10;
        coupon.used_count = coupon.usage_limit;
        coupon.min_order_amount = 1_000.0;

        assert_eq!(
            validate_coupon(&coupon, to_decimal(100.0), NOW),
            Err(CouponRejection::Expired)
        );

        // Exhausted AND below minimum: usage limit wins
        coupon.valid_until = NOW + 1_000;
        assert_eq!(
            validate_coupon(&coupon, to_decimal(100.0), NOW),
            Err(CouponRejection::LimitReached)
        );
    }

    // ==================== Discount Tests ====================

    #[test]
    fn test_fixed_discount() {
        let coupon = make_coupon(DiscountType::Fixed, 50.0);
        let discount = compute_discount(&coupon, to_decimal(500.0));
        assert_eq!(to_f64(discount), 50.0);
    }

    #[test]
    fn test_fixed_discount_capped_at_order_amount() {
        // 500 off a 300 order → 300
        let coupon = make_coupon(DiscountType::Fixed, 500.0);
        let discount = compute_discount(&coupon, to_decimal(300.0));
        assert_eq!(to_f64(discount), 300.0);
    }

    #[test]
    fn test_percentage_discount() {
        // 10% of 1000 = 100
        let coupon = make_coupon(DiscountType::Percentage, 10.0);
        let discount = compute_discount(&coupon, to_decimal(1000.0));
        assert_eq!(to_f64(discount), 100.0);
    }

    #[test]
    fn test_percentage_discount_capped() {
        // 10% of 1000 = 100, capped to 50
        let mut coupon = make_coupon(DiscountType::Percentage, 10.0);
        coupon.max_discount_amount = Some(50.0);

        let discount = compute_discount(&coupon, to_decimal(1000.0));
        assert_eq!(to_f64(discount), 50.0);
    }

    #[test]
    fn test_percentage_cap_not_binding() {
        // 10% of 400 = 40, cap 50 does not bind
        let mut coupon = make_coupon(DiscountType::Percentage, 10.0);
        coupon.max_discount_amount = Some(50.0);

        let discount = compute_discount(&coupon, to_decimal(400.0));
        assert_eq!(to_f64(discount), 40.0);
    }

    #[test]
    fn test_apply_coupon_combines_both() {
        let mut coupon = make_coupon(DiscountType::Percentage, 10.0);
        coupon.max_discount_amount = Some(50.0);

        let discount = apply_coupon(&coupon, to_decimal(1000.0), NOW).unwrap();
        assert_eq!(to_f64(discount), 50.0);

        coupon.is_active = false;
        assert_eq!(
            apply_coupon(&coupon, to_decimal(1000.0), NOW),
            Err(CouponRejection::Inactive)
        );
    }

    #[test]
    fn test_rejection_error_codes_distinct() {
        use std::collections::HashSet;

        let codes: HashSet<u16> = [
            CouponRejection::NotFound,
            CouponRejection::Inactive,
            CouponRejection::NotYetValid,
            CouponRejection::Expired,
            CouponRejection::LimitReached,
            CouponRejection::BelowMinimum,
        ]
        .iter()
        .map(|r| r.error_code().code())
        .collect();

        assert_eq!(codes.len(), 6);
    }
}
