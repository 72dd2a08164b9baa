//! Error types for the almanac-calendar crate.

use crate::civil::{MAX_YEAR, MIN_YEAR};
use crate::unit::Unit;

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Field overflow is clamped wherever a deterministic correction exists, so
/// these variants only cover values that cannot be represented at all:
/// malformed constructor input, years beyond the supported range and
/// arithmetic overflow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a wall-clock time has an out-of-range component.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        /// Hour component (must be 0..=23).
        hour: u8,
        /// Minute component (must be 0..=59).
        minute: u8,
        /// Second component (must be 0..=59).
        second: u8,
        /// Nanosecond component (must be below one billion).
        nanosecond: u32,
    },

    /// Returned when an ISO week number does not exist in its ISO year.
    #[error("invalid ISO week: {week} (ISO year {year} has {max_week} weeks)")]
    InvalidIsoWeek {
        /// The ISO week-numbering year.
        year: i32,
        /// The invalid week number.
        week: u8,
        /// Number of weeks in that ISO year (52 or 53).
        max_week: u8,
    },

    /// Returned when a computed year leaves the supported range.
    #[error("year {year} is outside the supported range {}..={}", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange {
        /// The unrepresentable year.
        year: i64,
    },

    /// Returned when a day count leaves the supported calendar range.
    #[error("date {days} days from 1970-01-01 is outside the supported range")]
    DateOutOfRange {
        /// Days since 1970-01-01.
        days: i64,
    },

    /// Returned when `amount` whole units cannot be expressed without overflow.
    #[error("shift of {amount} {unit}(s) overflows")]
    Overflow {
        /// Unit of the requested shift.
        unit: Unit,
        /// Requested number of units.
        amount: i64,
    },

    /// Returned when the underlying clock rejects a conversion.
    #[error("civil time conversion failed: {message}")]
    Civil {
        /// Message reported by the clock.
        message: String,
    },
}

impl From<jiff::Error> for CalendarError {
    fn from(err: jiff::Error) -> Self {
        Self::Civil {
            message: err.to_string(),
        }
    }
}
