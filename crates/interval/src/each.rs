//! Lazy enumeration of period starts.

use std::iter::FusedIterator;

use almanac_calendar::{
    CalendarError, Instant, Interval, SignedDuration, Unit, shift, start_of,
};
use tracing::debug;

use crate::unit::IntervalUnit;

/// Iterator over the starts of consecutive periods within an interval.
///
/// Boundaries are computed from the first one by index, so cloning the
/// iterator or calling [`EachUnit::restart`] replays the same sequence
/// without accumulated drift.
#[derive(Debug, Clone)]
pub struct EachUnit {
    bounds: Option<(Instant, Instant)>,
    unit: IntervalUnit,
    index: i64,
    done: bool,
}

impl EachUnit {
    fn empty(unit: IntervalUnit) -> Self {
        Self {
            bounds: None,
            unit,
            index: 0,
            done: true,
        }
    }

    /// The unit being enumerated.
    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Rewinds to the first boundary.
    pub fn restart(&mut self) {
        self.index = 0;
        self.done = self.bounds.is_none();
    }

    /// The `index`-th boundary after `first`.
    fn boundary(&self, first: &Instant, index: i64) -> Result<Instant, CalendarError> {
        let tz = first.time_zone().clone();
        match self.unit {
            IntervalUnit::Minute => first.checked_add(SignedDuration::from_mins(index)),
            IntervalUnit::Hour => first.checked_add(SignedDuration::from_hours(index)),
            IntervalUnit::Day => Instant::at_midnight(first.date().add_days(index)?, tz),
            IntervalUnit::Week(_) => Instant::at_midnight(first.date().add_days(index * 7)?, tz),
            IntervalUnit::Month => {
                Instant::at_midnight(shift(first, Unit::Month, index)?.date(), tz)
            }
            IntervalUnit::Quarter => {
                Instant::at_midnight(shift(first, Unit::Quarter, index)?.date(), tz)
            }
            IntervalUnit::Year => Instant::at_midnight(shift(first, Unit::Year, index)?.date(), tz),
        }
    }
}

impl Iterator for EachUnit {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        if self.done {
            return None;
        }
        let (first, last) = self.bounds.as_ref()?;
        match self.boundary(first, self.index) {
            Ok(boundary) if &boundary <= last => {
                self.index += 1;
                Some(boundary)
            }
            Ok(_) => {
                self.done = true;
                None
            }
            Err(err) => {
                debug!(unit = %self.unit, index = self.index, %err, "enumeration stopped early");
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for EachUnit {}

/// Enumerates the start of every `unit` period that overlaps `interval`.
///
/// Both bounds are normalized to the start of their period, read in the
/// zone of the interval's start, and boundaries are emitted while they do
/// not pass the normalized end. Minute and hour steps are absolute; day and
/// longer steps land on local midnight. An empty interval yields nothing.
///
/// # Errors
///
/// Returns [`CalendarError`] if a bound cannot be normalized.
#[tracing::instrument(level = "debug", skip(interval), fields(start = %interval.start(), end = %interval.end()))]
pub fn each_unit_of_interval(
    interval: &Interval,
    unit: IntervalUnit,
) -> Result<EachUnit, CalendarError> {
    if interval.is_empty() {
        debug!("empty interval");
        return Ok(EachUnit::empty(unit));
    }
    let period = unit.period();
    let first = start_of(interval.start(), period)?;
    let end = interval.end().in_time_zone(interval.start().time_zone());
    let last = start_of(&end, period)?;
    Ok(EachUnit {
        bounds: Some((first, last)),
        unit,
        index: 0,
        done: false,
    })
}
