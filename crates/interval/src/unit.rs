//! Step units for interval enumeration.

use std::fmt;

use almanac_calendar::{Period, WeekStart};

/// The period whose boundaries [`each_unit_of_interval`](crate::each_unit_of_interval)
/// emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Minute,
    Hour,
    Day,
    Week(WeekStart),
    Month,
    /// Quarters start in January, April, July and October.
    Quarter,
    Year,
}

impl IntervalUnit {
    /// The calendar period whose start this unit enumerates.
    pub fn period(self) -> Period {
        match self {
            IntervalUnit::Minute => Period::Minute,
            IntervalUnit::Hour => Period::Hour,
            IntervalUnit::Day => Period::Day,
            IntervalUnit::Week(start) => Period::Week(start),
            IntervalUnit::Month => Period::Month,
            IntervalUnit::Quarter => Period::Quarter,
            IntervalUnit::Year => Period::Year,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalUnit::Minute => f.write_str("minute"),
            IntervalUnit::Hour => f.write_str("hour"),
            IntervalUnit::Day => f.write_str("day"),
            IntervalUnit::Week(WeekStart::Monday) => f.write_str("week"),
            IntervalUnit::Week(WeekStart::Sunday) => f.write_str("week (sunday start)"),
            IntervalUnit::Month => f.write_str("month"),
            IntervalUnit::Quarter => f.write_str("quarter"),
            IntervalUnit::Year => f.write_str("year"),
        }
    }
}
