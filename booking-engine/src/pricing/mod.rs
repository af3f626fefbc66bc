//! Price computation modules
//!
//! Leaves first: add-on totals, customization totals, and the delivery
//! charge rule are independent pure functions. The coupon module validates
//! and computes discounts. `booking_calculator` composes everything into
//! the final [`shared::models::BookingPriceBreakdown`].

pub mod add_ons;
pub mod booking_calculator;
pub mod coupon;
pub mod customizations;
pub mod delivery;
pub mod money;

pub use coupon::CouponRejection;
