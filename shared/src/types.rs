//! Common value types
//!
//! `DayOfWeek` is the unit of delivery scheduling: tiffin listings declare
//! the days they deliver on, weekly customizations declare the days they
//! apply to, and bookings select a subset of days.

use serde::{Deserialize, Serialize};

/// Day of the week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days in calendar order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Convert from a chrono weekday
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    /// Short display name ("Mon".."Sun")
    pub fn short_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

/// Count the days present in both `days` and `selected`.
///
/// Iterates over [`DayOfWeek::ALL`] and checks membership on both sides,
/// so the result is independent of input ordering and duplicates.
pub fn count_common_days(days: &[DayOfWeek], selected: &[DayOfWeek]) -> usize {
    DayOfWeek::ALL
        .iter()
        .filter(|d| days.contains(d) && selected.contains(d))
        .count()
}

/// Count distinct days in `days` (duplicates ignored)
pub fn count_distinct_days(days: &[DayOfWeek]) -> usize {
    DayOfWeek::ALL.iter().filter(|d| days.contains(d)).count()
}
