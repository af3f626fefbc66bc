//! Coupon Model

use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Flat amount off the order subtotal
    Fixed,
    /// Percentage of the order subtotal, optionally capped
    Percentage,
}

/// Coupon entity
///
/// A coupon is functionally inactive once `used_count >= usage_limit` or
/// the validity window has passed, independent of the `is_active` flag.
/// Both conditions are checked at validation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Option<String>,
    /// Unique code, stored uppercase
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    /// Discount value (percentage: 10=10%, fixed: 50.00=₹50)
    pub discount_value: f64,
    /// Minimum order subtotal for the coupon to apply
    pub min_order_amount: f64,
    /// Cap on the computed discount (percentage coupons only)
    pub max_discount_amount: Option<f64>,
    /// Valid from datetime (UTC millis)
    pub valid_from: i64,
    /// Valid until datetime (UTC millis)
    pub valid_until: i64,
    /// Maximum number of successful redemptions
    pub usage_limit: u32,
    /// Successful redemptions so far
    pub used_count: u32,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: i64,
}

impl Coupon {
    /// Whether the usage limit has been exhausted
    pub fn is_exhausted(&self) -> bool {
        self.used_count >= self.usage_limit
    }
}

/// Create coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: Option<f64>,
    pub max_discount_amount: Option<f64>,
    pub valid_from: i64,
    pub valid_until: i64,
    pub usage_limit: u32,
    pub created_by: Option<String>,
}

/// Update coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub description: Option<String>,
    pub discount_value: Option<f64>,
    pub min_order_amount: Option<f64>,
    pub max_discount_amount: Option<f64>,
    pub valid_from: Option<i64>,
    pub valid_until: Option<i64>,
    pub usage_limit: Option<u32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_type_serde() {
        let json = serde_json::to_string(&DiscountType::Percentage).unwrap();
        assert_eq!(json, "\"PERCENTAGE\"");

        let dt: DiscountType = serde_json::from_str("\"FIXED\"").unwrap();
        assert_eq!(dt, DiscountType::Fixed);
    }

    #[test]
    fn test_is_exhausted() {
        let coupon = Coupon {
            id: None,
            code: "WELCOME10".to_string(),
            description: None,
            discount_type: DiscountType::Fixed,
            discount_value: 10.0,
            min_order_amount: 0.0,
            max_discount_amount: None,
            valid_from: 0,
            valid_until: i64::MAX,
            usage_limit: 5,
            used_count: 5,
            is_active: true,
            created_by: None,
            created_at: 0,
        };
        assert!(coupon.is_exhausted());
    }
}
