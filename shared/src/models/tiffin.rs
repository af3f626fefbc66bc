//! Tiffin Listing Model

use crate::types::DayOfWeek;
use serde::{Deserialize, Serialize};

/// Optional paid extra attached to a tiffin listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub name: String,
    /// Price per unit
    pub price: f64,
    pub is_available: bool,
}

/// Per-day-of-week optional modification with its own price
///
/// The price applies once per applicable day. Which days are applicable is
/// decided at booking time by intersecting `days` with the booking's
/// selected days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyCustomization {
    pub name: String,
    pub description: Option<String>,
    /// Price per applicable day
    pub price: f64,
    /// Days of the week this customization is offered on
    pub days: Vec<DayOfWeek>,
    pub is_available: bool,
}

/// Tiffin listing entity (published by a seller)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tiffin {
    pub id: Option<String>,
    pub seller_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Base price per unit (per day for weekly plans)
    pub price: f64,
    /// Days of the week the seller delivers on
    pub available_days: Vec<DayOfWeek>,
    pub add_ons: Vec<AddOn>,
    pub weekly_customizations: Vec<WeeklyCustomization>,
    pub is_active: bool,
    pub created_at: i64,
}

impl Tiffin {
    /// Look up a published add-on by name (available ones only)
    pub fn find_add_on(&self, name: &str) -> Option<&AddOn> {
        self.add_ons
            .iter()
            .find(|a| a.name == name && a.is_available)
    }

    /// Look up a customization by name (available or not; availability is
    /// checked separately so the caller can report a precise reason)
    pub fn find_customization(&self, name: &str) -> Option<&WeeklyCustomization> {
        self.weekly_customizations.iter().find(|c| c.name == name)
    }
}

/// Create tiffin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiffinCreate {
    pub seller_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub available_days: Vec<DayOfWeek>,
    pub add_ons: Option<Vec<AddOn>>,
    pub weekly_customizations: Option<Vec<WeeklyCustomization>>,
}

/// Update tiffin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiffinUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available_days: Option<Vec<DayOfWeek>>,
    pub add_ons: Option<Vec<AddOn>>,
    pub weekly_customizations: Option<Vec<WeeklyCustomization>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tiffin() -> Tiffin {
        Tiffin {
            id: Some("tiffin-1".to_string()),
            seller_id: "seller-1".to_string(),
            name: "Veg Thali".to_string(),
            description: None,
            price: 100.0,
            available_days: vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday],
            add_ons: vec![
                AddOn {
                    name: "Extra Roti".to_string(),
                    price: 10.0,
                    is_available: true,
                },
                AddOn {
                    name: "Dessert".to_string(),
                    price: 30.0,
                    is_available: false,
                },
            ],
            weekly_customizations: vec![WeeklyCustomization {
                name: "Paneer Upgrade".to_string(),
                description: None,
                price: 20.0,
                days: vec![DayOfWeek::Monday, DayOfWeek::Tuesday],
                is_available: true,
            }],
            is_active: true,
            created_at: 0,
        }
    }

    #[test]
    fn test_find_add_on_skips_unavailable() {
        let tiffin = make_tiffin();
        assert!(tiffin.find_add_on("Extra Roti").is_some());
        assert!(tiffin.find_add_on("Dessert").is_none());
        assert!(tiffin.find_add_on("Missing").is_none());
    }

    #[test]
    fn test_find_customization() {
        let tiffin = make_tiffin();
        assert!(tiffin.find_customization("Paneer Upgrade").is_some());
        assert!(tiffin.find_customization("Missing").is_none());
    }
}
