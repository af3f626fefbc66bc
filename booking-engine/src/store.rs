//! Coupon store
//!
//! The persistence seam for coupons. The one operation that matters for
//! correctness is [`CouponStore::redeem`]: the `used_count < usage_limit`
//! check and the increment must happen as a single atomic step, never as a
//! read-modify-write from application code, so concurrent redemptions near
//! the limit cannot both succeed.
//!
//! A database-backed implementation should express `redeem` as one
//! conditional update statement. The in-memory implementation here mutates
//! under the map's shard lock, which gives the same guarantee in-process.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::error::{AppError, ErrorCode};
use shared::models::{Coupon, CouponCreate};
use thiserror::Error;

use crate::pricing::money::validate_price;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Coupon not found: {0}")]
    NotFound(String),

    #[error("Coupon '{0}' already exists")]
    Duplicate(String),

    #[error("Invalid coupon data: {0}")]
    Invalid(String),

    /// Usage limit already reached at redemption time. Callers that
    /// validated earlier and lost the race should retry the booking
    /// without the coupon.
    #[error("Coupon usage limit reached: {0}")]
    LimitReached(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(code) => {
                AppError::new(ErrorCode::CouponNotFound).with_detail("code", code)
            }
            StoreError::Duplicate(code) => {
                AppError::new(ErrorCode::CouponCodeExists).with_detail("code", code)
            }
            StoreError::Invalid(msg) => AppError::validation(msg),
            StoreError::LimitReached(code) => {
                AppError::new(ErrorCode::CouponLimitReached).with_detail("code", code)
            }
            StoreError::Storage(msg) => AppError::storage(msg),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Coupon persistence operations used by the booking engine
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Find a coupon by code (case-insensitive; codes are stored uppercase)
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Coupon>>;

    /// Create a new coupon, rejecting duplicate codes
    async fn create(&self, data: CouponCreate) -> StoreResult<Coupon>;

    /// Atomically redeem one use of a coupon.
    ///
    /// Succeeds only while `used_count < usage_limit`; the check and the
    /// increment are one atomic step. Returns the coupon state after the
    /// increment.
    async fn redeem(&self, code: &str) -> StoreResult<Coupon>;
}

/// In-memory coupon store
///
/// Used by tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryCouponStore {
    coupons: DashMap<String, Coupon>,
}

impl InMemoryCouponStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CouponStore for InMemoryCouponStore {
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Coupon>> {
        let key = code.to_uppercase();
        Ok(self.coupons.get(&key).map(|entry| entry.clone()))
    }

    async fn create(&self, data: CouponCreate) -> StoreResult<Coupon> {
        let code = data.code.to_uppercase();

        // Monetary fields must be sane before the coupon can ever price
        // a booking
        validate_price(data.discount_value, "coupon.discount_value")
            .map_err(|e| StoreError::Invalid(e.message))?;
        if let Some(min) = data.min_order_amount {
            validate_price(min, "coupon.min_order_amount")
                .map_err(|e| StoreError::Invalid(e.message))?;
        }
        if let Some(cap) = data.max_discount_amount {
            validate_price(cap, "coupon.max_discount_amount")
                .map_err(|e| StoreError::Invalid(e.message))?;
        }

        let coupon = Coupon {
            id: None,
            code: code.clone(),
            description: data.description,
            discount_type: data.discount_type,
            discount_value: data.discount_value,
            min_order_amount: data.min_order_amount.unwrap_or(0.0),
            max_discount_amount: data.max_discount_amount,
            valid_from: data.valid_from,
            valid_until: data.valid_until,
            usage_limit: data.usage_limit,
            used_count: 0,
            is_active: true,
            created_by: data.created_by,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        match self.coupons.entry(code.clone()) {
            dashmap::Entry::Occupied(_) => Err(StoreError::Duplicate(code)),
            dashmap::Entry::Vacant(entry) => {
                entry.insert(coupon.clone());
                Ok(coupon)
            }
        }
    }

    async fn redeem(&self, code: &str) -> StoreResult<Coupon> {
        let key = code.to_uppercase();

        // get_mut holds the shard lock, so the limit check and the
        // increment form a single critical section.
        let mut entry = self
            .coupons
            .get_mut(&key)
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;

        if entry.is_exhausted() {
            return Err(StoreError::LimitReached(key));
        }

        entry.used_count += 1;
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DiscountType;

    fn make_create(code: &str, usage_limit: u32) -> CouponCreate {
        CouponCreate {
            code: code.to_string(),
            description: None,
            discount_type: DiscountType::Fixed,
            discount_value: 50.0,
            min_order_amount: None,
            max_discount_amount: None,
            valid_from: 0,
            valid_until: i64::MAX,
            usage_limit,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_code_to_uppercase() {
        let store = InMemoryCouponStore::new();
        let coupon = store.create(make_create("welcome10", 5)).await.unwrap();
        assert_eq!(coupon.code, "WELCOME10");

        // Lookup works with any case
        assert!(store.find_by_code("Welcome10").await.unwrap().is_some());
        assert!(store.find_by_code("WELCOME10").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_code() {
        let store = InMemoryCouponStore::new();
        store.create(make_create("SAVE", 5)).await.unwrap();

        let result = store.create(make_create("save", 5)).await;
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_redeem_increments_once() {
        let store = InMemoryCouponStore::new();
        store.create(make_create("SAVE", 5)).await.unwrap();

        let coupon = store.redeem("SAVE").await.unwrap();
        assert_eq!(coupon.used_count, 1);

        let coupon = store.redeem("save").await.unwrap();
        assert_eq!(coupon.used_count, 2);
    }

    #[tokio::test]
    async fn test_redeem_stops_at_limit() {
        let store = InMemoryCouponStore::new();
        store.create(make_create("SAVE", 2)).await.unwrap();

        store.redeem("SAVE").await.unwrap();
        store.redeem("SAVE").await.unwrap();

        let result = store.redeem("SAVE").await;
        assert!(matches!(result, Err(StoreError::LimitReached(_))));

        // Count did not move past the limit
        let coupon = store.find_by_code("SAVE").await.unwrap().unwrap();
        assert_eq!(coupon.used_count, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_amounts() {
        let store = InMemoryCouponStore::new();

        let mut create = make_create("BAD", 5);
        create.discount_value = -50.0;
        assert!(matches!(
            store.create(create).await,
            Err(StoreError::Invalid(_))
        ));

        let mut create = make_create("BAD", 5);
        create.discount_value = f64::NAN;
        assert!(matches!(
            store.create(create).await,
            Err(StoreError::Invalid(_))
        ));

        let mut create = make_create("BAD", 5);
        create.max_discount_amount = Some(-1.0);
        assert!(matches!(
            store.create(create).await,
            Err(StoreError::Invalid(_))
        ));

        // Nothing was stored
        assert!(store.find_by_code("BAD").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redeem_unknown_code() {
        let store = InMemoryCouponStore::new();
        let result = store.redeem("NOPE").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_store_error_maps_to_app_error() {
        let err: AppError = StoreError::LimitReached("SAVE".to_string()).into();
        assert_eq!(err.code, ErrorCode::CouponLimitReached);

        let err: AppError = StoreError::NotFound("SAVE".to_string()).into();
        assert_eq!(err.code, ErrorCode::CouponNotFound);
    }
}
