//! Unified error codes for the booking platform
//!
//! Error codes are shared between backend crates and frontend clients.
//! They are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Coupon errors
//! - 6xxx: Listing errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Booking quantity must be between 1 and the allowed maximum
    BookingInvalidQuantity = 4002,
    /// Selected days are not available for this listing
    BookingInvalidDays = 4003,
    /// Booking status transition is not allowed
    BookingInvalidTransition = 4004,
    /// Booking price fields are immutable after creation
    BookingPriceImmutable = 4005,

    // ==================== 5xxx: Coupon ====================
    /// Coupon code not found
    CouponNotFound = 5001,
    /// Coupon has been deactivated
    CouponInactive = 5002,
    /// Coupon validity window has not started
    CouponNotYetValid = 5003,
    /// Coupon validity window has ended
    CouponExpired = 5004,
    /// Coupon usage limit reached
    CouponLimitReached = 5005,
    /// Order amount below coupon minimum
    CouponBelowMinimum = 5006,
    /// Coupon code already exists
    CouponCodeExists = 5007,

    // ==================== 6xxx: Listing ====================
    /// Tiffin listing not found
    TiffinNotFound = 6001,
    /// Tiffin listing is not active
    TiffinInactive = 6002,
    /// Tiffin has invalid price
    TiffinInvalidPrice = 6003,
    /// Add-on not found on listing
    AddOnNotFound = 6101,
    /// Weekly customization not found on listing
    CustomizationNotFound = 6201,
    /// Weekly customization is not available
    CustomizationUnavailable = 6202,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::ValueOutOfRange => "Value out of range",

            Self::BookingNotFound => "Booking not found",
            Self::BookingInvalidQuantity => "Invalid booking quantity",
            Self::BookingInvalidDays => "Selected days are not available",
            Self::BookingInvalidTransition => "Booking status transition not allowed",
            Self::BookingPriceImmutable => "Booking price fields are immutable",

            Self::CouponNotFound => "Coupon not found",
            Self::CouponInactive => "Coupon is inactive",
            Self::CouponNotYetValid => "Coupon is not yet valid",
            Self::CouponExpired => "Coupon has expired",
            Self::CouponLimitReached => "Coupon usage limit reached",
            Self::CouponBelowMinimum => "Order amount below coupon minimum",
            Self::CouponCodeExists => "Coupon code already exists",

            Self::TiffinNotFound => "Tiffin not found",
            Self::TiffinInactive => "Tiffin is not active",
            Self::TiffinInvalidPrice => "Tiffin has invalid price",
            Self::AddOnNotFound => "Add-on not found",
            Self::CustomizationNotFound => "Customization not found",
            Self::CustomizationUnavailable => "Customization is not available",

            Self::InternalError => "Internal server error",
            Self::StorageError => "Storage error",
        }
    }

    /// Get the HTTP status code equivalent for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::ValueOutOfRange
            | Self::BookingInvalidQuantity
            | Self::BookingInvalidDays => StatusCode::BAD_REQUEST,

            Self::NotFound
            | Self::BookingNotFound
            | Self::CouponNotFound
            | Self::TiffinNotFound
            | Self::AddOnNotFound
            | Self::CustomizationNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::CouponCodeExists | Self::CouponLimitReached => {
                StatusCode::CONFLICT
            }

            Self::BookingInvalidTransition
            | Self::BookingPriceImmutable
            | Self::CouponInactive
            | Self::CouponNotYetValid
            | Self::CouponExpired
            | Self::CouponBelowMinimum
            | Self::TiffinInactive
            | Self::TiffinInvalidPrice
            | Self::CustomizationUnavailable => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Unknown | Self::InternalError | Self::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            8 => Self::ValueOutOfRange,

            4001 => Self::BookingNotFound,
            4002 => Self::BookingInvalidQuantity,
            4003 => Self::BookingInvalidDays,
            4004 => Self::BookingInvalidTransition,
            4005 => Self::BookingPriceImmutable,

            5001 => Self::CouponNotFound,
            5002 => Self::CouponInactive,
            5003 => Self::CouponNotYetValid,
            5004 => Self::CouponExpired,
            5005 => Self::CouponLimitReached,
            5006 => Self::CouponBelowMinimum,
            5007 => Self::CouponCodeExists,

            6001 => Self::TiffinNotFound,
            6002 => Self::TiffinInactive,
            6003 => Self::TiffinInvalidPrice,
            6101 => Self::AddOnNotFound,
            6201 => Self::CustomizationNotFound,
            6202 => Self::CustomizationUnavailable,

            9001 => Self::InternalError,
            9002 => Self::StorageError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
