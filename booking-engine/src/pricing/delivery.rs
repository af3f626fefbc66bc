//! Delivery charge rule
//!
//! A flat charge applies to single and trial bookings; weekly and monthly
//! plans waive it. The waiver itself lives on
//! [`shared::models::BookingType::waives_delivery_charge`] so the
//! per-booking-type table stays in one auditable place.

use rust_decimal::Decimal;
use shared::models::BookingType;

use super::money::to_decimal;
use crate::config::EngineConfig;

/// Compute the delivery charge for a booking type
pub fn delivery_charge(booking_type: BookingType, config: &EngineConfig) -> Decimal {
    if booking_type.waives_delivery_charge() {
        Decimal::ZERO
    } else {
        to_decimal(config.flat_delivery_charge)
    }
}
