//! Comparisons between instants and calendar periods.

use std::cmp::Ordering;

use jiff::tz::TimeZone;

use crate::boundary::{Period, period_index};
use crate::instant::Instant;
use crate::interval::Interval;

/// Returns `true` if `a` and `b` fall in the same `period` when both are
/// read in `tz`.
pub fn is_same(a: &Instant, b: &Instant, period: Period, tz: &TimeZone) -> bool {
    period_offset(a, b, period, tz) == 0
}

/// Number of periods from `b` to `a`, both read in `tz`.
fn period_offset(a: &Instant, b: &Instant, period: Period, tz: &TimeZone) -> i64 {
    let a = a.in_time_zone(tz);
    let b = b.in_time_zone(tz);
    period_index(a.date(), a.time(), period) - period_index(b.date(), b.time(), period)
}

/// Returns `true` if `instant` lies within `interval`, bounds included.
///
/// Always `false` for an empty interval.
pub fn is_within_interval(instant: &Instant, interval: &Interval) -> bool {
    interval.contains(instant)
}

/// Orders earlier instants first.
pub fn compare_asc(a: &Instant, b: &Instant) -> Ordering {
    a.cmp(b)
}

/// Orders later instants first.
pub fn compare_desc(a: &Instant, b: &Instant) -> Ordering {
    b.cmp(a)
}

/// Returns the earliest instant, or `None` for an empty sequence.
pub fn earliest<'a, I>(instants: I) -> Option<&'a Instant>
where
    I: IntoIterator<Item = &'a Instant>,
{
    instants.into_iter().min()
}

/// Returns the latest instant, or `None` for an empty sequence.
pub fn latest<'a, I>(instants: I) -> Option<&'a Instant>
where
    I: IntoIterator<Item = &'a Instant>,
{
    instants.into_iter().max()
}

/// Returns the candidate closest in absolute time to `target`.
///
/// On a tie the first candidate wins. `None` for an empty sequence.
pub fn closest_to<'a, I>(target: &Instant, candidates: I) -> Option<&'a Instant>
where
    I: IntoIterator<Item = &'a Instant>,
{
    let mut best: Option<(&Instant, jiff::SignedDuration)> = None;
    for candidate in candidates {
        let distance = candidate.duration_since(target).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(instant, _)| instant)
}

/// Returns `true` if `instant` falls in the current `period` in `tz`.
///
/// The system clock is read once.
pub fn is_this(instant: &Instant, period: Period, tz: &TimeZone) -> bool {
    is_same(instant, &Instant::now(tz.clone()), period, tz)
}

/// Returns `true` if `instant` falls on today's date in `tz`.
pub fn is_today(instant: &Instant, tz: &TimeZone) -> bool {
    is_this(instant, Period::Day, tz)
}

/// Returns `true` if `instant` falls on tomorrow's date in `tz`.
pub fn is_tomorrow(instant: &Instant, tz: &TimeZone) -> bool {
    period_offset(instant, &Instant::now(tz.clone()), Period::Day, tz) == 1
}

/// Returns `true` if `instant` falls on yesterday's date in `tz`.
pub fn is_yesterday(instant: &Instant, tz: &TimeZone) -> bool {
    period_offset(instant, &Instant::now(tz.clone()), Period::Day, tz) == -1
}
