//! Engine configuration

use serde::{Deserialize, Serialize};

/// Default flat delivery charge (₹19)
const DEFAULT_FLAT_DELIVERY_CHARGE: f64 = 19.0;

/// Policy for pricing weekly customizations when the booking selects no days
///
/// The original product priced an empty selection over the customization's
/// full configured day list. That leniency is kept as the default but is an
/// explicit, configurable choice rather than implicit behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmptyDayPolicy {
    /// Empty selection prices over the customization's full day list
    #[default]
    FullAvailability,
    /// Empty selection prices as zero applicable days
    NoDays,
}

/// Configuration for the booking pricing engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Flat delivery charge for single/trial bookings
    pub flat_delivery_charge: f64,
    /// How to price weekly customizations with an empty day selection
    pub empty_day_policy: EmptyDayPolicy,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            flat_delivery_charge: std::env::var("FLAT_DELIVERY_CHARGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FLAT_DELIVERY_CHARGE),
            empty_day_policy: std::env::var("EMPTY_DAY_POLICY")
                .ok()
                .map(|v| match v.to_ascii_lowercase().as_str() {
                    "no_days" | "no-days" => EmptyDayPolicy::NoDays,
                    _ => EmptyDayPolicy::FullAvailability,
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            flat_delivery_charge: DEFAULT_FLAT_DELIVERY_CHARGE,
            empty_day_policy: EmptyDayPolicy::default(),
        }
    }
}
