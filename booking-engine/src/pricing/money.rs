//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization, rounded to 2 decimal places half-up.

use rust_decimal::prelude::*;
use shared::error::AppError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per unit (₹1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: u32 = 9999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate that a monetary value is finite, non-negative, and bounded
pub fn validate_price(value: f64, field_name: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        ))
        .with_detail("field", field_name));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field_name, value
        ))
        .with_detail("field", field_name));
    }
    if value > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_PRICE, value
        ))
        .with_detail("field", field_name));
    }
    Ok(())
}

/// Validate that a quantity is within 1..=MAX_QUANTITY
pub fn validate_quantity(quantity: u32, field_name: &str) -> Result<(), AppError> {
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            shared::error::ErrorCode::BookingInvalidQuantity,
            format!(
                "{} must be between 1 and {}, got {}",
                field_name, MAX_QUANTITY, quantity
            ),
        )
        .with_detail("field", field_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_rounding_half_up() {
        // 10.005 rounds away from zero to 10.01
        let value = Decimal::from_str_exact("10.005").unwrap();
        assert_eq!(to_f64(value), 10.01);
    }

    #[test]
    fn test_roundtrip_precision() {
        // 0.1 + 0.2 is exactly 0.3 through Decimal
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_validate_price_rejects_nan_and_negative() {
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(f64::INFINITY, "price").is_err());
        assert!(validate_price(-0.01, "price").is_err());
        assert!(validate_price(MAX_PRICE + 1.0, "price").is_err());
        assert!(validate_price(0.0, "price").is_ok());
        assert!(validate_price(99.99, "price").is_ok());
    }

    #[test]
    fn test_validate_quantity_bounds() {
        let err = validate_quantity(0, "quantity").unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingInvalidQuantity);

        assert!(validate_quantity(1, "quantity").is_ok());
        assert!(validate_quantity(MAX_QUANTITY, "quantity").is_ok());
        assert!(validate_quantity(MAX_QUANTITY + 1, "quantity").is_err());
    }
}
