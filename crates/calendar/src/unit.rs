//! Units of calendar arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// Seconds in a day of fixed length (no DST transition).
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Seconds in a week of fixed-length days.
pub const SECONDS_PER_WEEK: i64 = 604_800;

/// A unit in which an instant can be shifted or a difference measured.
///
/// Second through week have a fixed length and are applied as absolute
/// durations. Month, quarter and year are calendar units whose length
/// depends on where they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Unit {
    /// Length of the unit in seconds, or `None` for calendar units.
    pub fn seconds(self) -> Option<i64> {
        match self {
            Unit::Second => Some(1),
            Unit::Minute => Some(SECONDS_PER_MINUTE),
            Unit::Hour => Some(SECONDS_PER_HOUR),
            Unit::Day => Some(SECONDS_PER_DAY),
            Unit::Week => Some(SECONDS_PER_WEEK),
            Unit::Month | Unit::Quarter | Unit::Year => None,
        }
    }

    /// Returns `true` for month, quarter and year.
    pub fn is_calendar(self) -> bool {
        self.seconds().is_none()
    }

    /// Lower-case singular name.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Quarter => "quarter",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
