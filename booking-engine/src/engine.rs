//! Booking engine
//!
//! Facade tying the pure pricing pipeline to the coupon store. Two
//! entry points:
//! - [`BookingEngine::quote`]: read-only; resolves the coupon code and
//!   prices the request without touching any counter.
//! - [`BookingEngine::create_booking`]: prices the request, redeems the
//!   coupon atomically if one applies, and produces a pending booking.
//!
//! A coupon can pass validation at quote time and still lose the
//! redemption race at creation time. That surfaces as a usage-limit
//! error; the caller decides whether to retry without the coupon.

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::{Booking, BookingPriceBreakdown, BookingRequest, Coupon, Tiffin};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::pricing::CouponRejection;
use crate::pricing::booking_calculator::compute_booking_total;
use crate::store::CouponStore;

/// Priced quote for a booking request
#[derive(Debug, Clone)]
pub struct BookingQuote {
    pub breakdown: BookingPriceBreakdown,
    /// Why the requested coupon was not applied, if it was rejected
    pub coupon_rejection: Option<CouponRejection>,
}

impl BookingQuote {
    /// Whether a coupon discount made it into the breakdown
    pub fn coupon_applied(&self) -> bool {
        self.breakdown.coupon_code.is_some()
    }
}

/// Booking pricing engine
pub struct BookingEngine {
    store: Arc<dyn CouponStore>,
    config: EngineConfig,
}

impl BookingEngine {
    pub fn new(store: Arc<dyn CouponStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Price a booking request without side effects.
    ///
    /// The coupon, if requested, is only validated; its usage counter is
    /// untouched. `delivery_charge_override` replaces the configured flat
    /// charge (the weekly/monthly waiver still applies). `now` is UTC
    /// millis.
    pub async fn quote(
        &self,
        tiffin: &Tiffin,
        request: &BookingRequest,
        delivery_charge_override: Option<f64>,
        now: i64,
    ) -> AppResult<BookingQuote> {
        let coupon = self.resolve_coupon(request).await?;

        let outcome = compute_booking_total(
            tiffin,
            request,
            coupon.as_ref(),
            delivery_charge_override,
            now,
            &self.config,
        )?;

        if let Some(rejection) = outcome.coupon_rejection {
            warn!(
                code = request.coupon_code.as_deref().unwrap_or(""),
                reason = %rejection,
                "coupon rejected, quoting without discount"
            );
        }

        Ok(BookingQuote {
            breakdown: outcome.breakdown,
            coupon_rejection: outcome.coupon_rejection,
        })
    }

    /// Price the request, redeem the coupon if one applies, and build a
    /// pending booking.
    ///
    /// Redemption is the atomic conditional increment on the store; if
    /// another booking takes the last use between quote and redeem, this
    /// returns the usage-limit error and nothing is persisted. Retrying
    /// without the coupon is the caller's call.
    pub async fn create_booking(
        &self,
        tiffin: &Tiffin,
        request: &BookingRequest,
        delivery_charge_override: Option<f64>,
        now: i64,
    ) -> AppResult<Booking> {
        let quote = self
            .quote(tiffin, request, delivery_charge_override, now)
            .await?;

        if let Some(code) = &quote.breakdown.coupon_code {
            let redeemed = self.store.redeem(code).await.map_err(|err| {
                warn!(code = %code, error = %err, "coupon redemption failed");
                err
            })?;
            info!(
                code = %redeemed.code,
                used_count = redeemed.used_count,
                usage_limit = redeemed.usage_limit,
                "coupon redeemed"
            );
        }

        let booking = Booking::new(request, tiffin.seller_id.clone(), quote.breakdown);
        info!(
            booking_id = %booking.id,
            tiffin_id = %booking.tiffin_id,
            total = booking.breakdown.total,
            "booking created"
        );
        Ok(booking)
    }

    async fn resolve_coupon(&self, request: &BookingRequest) -> AppResult<Option<Coupon>> {
        match &request.coupon_code {
            Some(code) => Ok(self.store.find_by_code(code).await?),
            None => Ok(None),
        }
    }
}
