//! Data models
//!
//! Shared between the booking engine and API crates (via JSON).
//! All timestamps are UTC millis (`i64`); all monetary fields are `f64`
//! rounded to 2 decimal places by the engine.

pub mod booking;
pub mod coupon;
pub mod tiffin;

// Re-exports
pub use booking::*;
pub use coupon::*;
pub use tiffin::*;
