//! Booking price and discount computation
//!
//! The single place where a customer's order total is derived from a tiffin
//! listing, the customer's booking form, and an optional coupon. The
//! computation is pure arithmetic over already-fetched data; the only side
//! effect in this crate is coupon redemption, which goes through the
//! [`store::CouponStore`] seam as an atomic conditional increment.

pub mod config;
pub mod engine;
pub mod pricing;
pub mod store;

pub use config::{EmptyDayPolicy, EngineConfig};
pub use engine::{BookingEngine, BookingQuote};
pub use pricing::booking_calculator::{PricingOutcome, compute_booking_total};
pub use store::{CouponStore, InMemoryCouponStore, StoreError};
