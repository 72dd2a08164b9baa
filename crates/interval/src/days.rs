//! Weekend and business-day enumeration.

use std::iter::FusedIterator;

use almanac_business::is_weekend;
use almanac_calendar::{CalendarError, Instant, Interval};

use crate::each::{EachUnit, each_unit_of_interval};
use crate::unit::IntervalUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayKind {
    Weekend,
    Business,
}

/// Iterator over the days of an interval that are weekend days, or that
/// are business days.
#[derive(Debug, Clone)]
pub struct EachDayOfKind {
    days: EachUnit,
    kind: DayKind,
}

impl EachDayOfKind {
    /// Rewinds to the first matching day.
    pub fn restart(&mut self) {
        self.days.restart();
    }
}

impl Iterator for EachDayOfKind {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        let kind = self.kind;
        self.days
            .by_ref()
            .find(|day| is_weekend(day) == (kind == DayKind::Weekend))
    }
}

impl FusedIterator for EachDayOfKind {}

/// Midnight of every Saturday and Sunday in `interval`.
///
/// # Errors
///
/// Returns [`CalendarError`] if a bound cannot be normalized.
pub fn each_weekend_of_interval(interval: &Interval) -> Result<EachDayOfKind, CalendarError> {
    Ok(EachDayOfKind {
        days: each_unit_of_interval(interval, IntervalUnit::Day)?,
        kind: DayKind::Weekend,
    })
}

/// Midnight of every Monday through Friday in `interval`.
///
/// # Errors
///
/// Returns [`CalendarError`] if a bound cannot be normalized.
pub fn each_business_day_of_interval(interval: &Interval) -> Result<EachDayOfKind, CalendarError> {
    Ok(EachDayOfKind {
        days: each_unit_of_interval(interval, IntervalUnit::Day)?,
        kind: DayKind::Business,
    })
}
