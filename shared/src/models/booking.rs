//! Booking Model
//!
//! The booking aggregate holds a snapshot of what was ordered plus the full
//! price breakdown computed at creation time. Price fields are immutable
//! after creation; only `status` transitions afterwards.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::types::DayOfWeek;
use serde::{Deserialize, Serialize};

use super::tiffin::WeeklyCustomization;

/// Booking type enum
///
/// Pricing behavior per type lives here as an explicit strategy table
/// (day multiplier and delivery waiver) so the rules stay auditable and
/// testable in isolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    Single,
    Trial,
    Weekly,
    Monthly,
}

impl BookingType {
    /// Multiplier applied to the base price for the number of selected days.
    ///
    /// Weekly plans price per selected day; single/trial/monthly do not
    /// multiply by day count. The asymmetry between weekly and monthly is
    /// deliberate and preserved from the original product behavior.
    pub fn day_multiplier(&self, selected_day_count: usize) -> usize {
        match self {
            BookingType::Weekly => selected_day_count,
            BookingType::Single | BookingType::Trial | BookingType::Monthly => 1,
        }
    }

    /// Whether this booking type waives the flat delivery charge
    pub fn waives_delivery_charge(&self) -> bool {
        match self {
            BookingType::Weekly | BookingType::Monthly => true,
            BookingType::Single | BookingType::Trial => false,
        }
    }
}

/// Booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Delivered,
}

impl BookingStatus {
    /// Check if a status transition is allowed
    ///
    /// Pending → Confirmed | Cancelled, Confirmed → Delivered | Cancelled.
    /// Cancelled and Delivered are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Delivered)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Delivered)
    }
}

/// Add-on line item selected at booking time
///
/// Ephemeral: constructed from the seller's published add-on list and
/// persisted only inside the booking record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOnSelection {
    pub name: String,
    /// Unit price snapshot
    pub price: f64,
    pub quantity: u32,
}

/// Customer-submitted booking form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub tiffin_id: String,
    pub customer_id: String,
    pub booking_type: BookingType,
    pub quantity: u32,
    /// Delivery days chosen by the customer (may be empty; see
    /// the engine's empty-day policy)
    pub selected_days: Vec<DayOfWeek>,
    /// Names of add-ons chosen from the listing, with quantities
    pub add_ons: Vec<AddOnChoice>,
    /// Names of weekly customizations chosen from the listing
    pub customizations: Vec<String>,
    /// Optional coupon code (any case; normalized to uppercase)
    pub coupon_code: Option<String>,
}

/// Add-on choice in the booking form (resolved against the listing)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOnChoice {
    pub name: String,
    pub quantity: u32,
}

/// Price breakdown produced by the booking calculator
///
/// Invariant: `total == base_price + add_ons_price + customizations_price
/// + delivery_charge - discount_amount`, floored at 0, all fields rounded
/// to 2 decimal places.
///
/// This is the single reconciliation point: the customer confirmation and
/// the seller notification must both render exactly these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingPriceBreakdown {
    /// Listing price × quantity (× selected day count for weekly plans)
    pub base_price: f64,
    /// Sum of add-on line items
    pub add_ons_price: f64,
    /// Sum of weekly customization costs over applicable days
    pub customizations_price: f64,
    /// base + add-ons + customizations
    pub subtotal: f64,
    /// Flat charge, waived for weekly/monthly plans
    pub delivery_charge: f64,
    /// Coupon discount (0 when no coupon applied)
    pub discount_amount: f64,
    /// Applied coupon code (uppercase), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Final payable amount
    pub total: f64,
    /// Add-on selections snapshot
    pub add_ons: Vec<AddOnSelection>,
    /// Weekly customization snapshots
    pub customizations: Vec<WeeklyCustomization>,
}

/// Booking aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub tiffin_id: String,
    pub customer_id: String,
    pub seller_id: String,
    pub booking_type: BookingType,
    pub quantity: u32,
    pub selected_days: Vec<DayOfWeek>,
    pub breakdown: BookingPriceBreakdown,
    pub status: BookingStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Booking {
    /// Create a pending booking from a priced request
    pub fn new(
        request: &BookingRequest,
        seller_id: impl Into<String>,
        breakdown: BookingPriceBreakdown,
    ) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tiffin_id: request.tiffin_id.clone(),
            customer_id: request.customer_id.clone(),
            seller_id: seller_id.into(),
            booking_type: request.booking_type,
            quantity: request.quantity,
            selected_days: request.selected_days.clone(),
            breakdown,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition to a new status, enforcing the allowed transitions
    pub fn transition_to(&mut self, next: BookingStatus) -> AppResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::new(ErrorCode::BookingInvalidTransition)
                .with_detail("from", format!("{:?}", self.status))
                .with_detail("to", format!("{:?}", next)));
        }
        self.status = next;
        self.updated_at = chrono::Utc::now().timestamp_millis();
        Ok(())
    }
}
