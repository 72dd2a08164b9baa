//! Differences between instants in whole units.

use crate::boundary::{Period, WeekStart, period_index};
use crate::civil::CivilDate;
use crate::instant::Instant;
use crate::unit::Unit;

/// Number of whole `unit`s from `b` to `a`, truncated toward zero.
///
/// Positive when `a` is later. Fixed units divide the elapsed absolute time.
/// Months count full calendar months: an end day of month smaller than the
/// start day does not complete the last month. Quarters are full months
/// divided by three; years require the anniversary to have passed. Calendar
/// units read both instants in `a`'s zone.
pub fn difference_in(a: &Instant, b: &Instant, unit: Unit) -> i64 {
    match unit.seconds() {
        Some(length) => a.duration_since(b).as_secs() / length,
        None => {
            let b = b.in_time_zone(a.time_zone());
            let (later, earlier, sign) = if a >= &b {
                (a.date(), b.date(), 1)
            } else {
                (b.date(), a.date(), -1)
            };
            let count = match unit {
                Unit::Year => full_years(later, earlier),
                Unit::Quarter => full_months(later, earlier) / 3,
                _ => full_months(later, earlier),
            };
            sign * count
        }
    }
}

/// Number of `unit` boundaries crossed going from `b` to `a`.
///
/// Time within the unit is ignored: 23:59 and 00:01 the next day are one
/// calendar day apart. Both instants are read in `a`'s zone; weeks start on
/// Monday.
pub fn calendar_difference_in(a: &Instant, b: &Instant, unit: Unit) -> i64 {
    let b = b.in_time_zone(a.time_zone());
    let index = |t: &Instant| match unit {
        Unit::Second => {
            period_index(t.date(), t.time(), Period::Minute) * 60 + i64::from(t.second())
        }
        Unit::Minute => period_index(t.date(), t.time(), Period::Minute),
        Unit::Hour => period_index(t.date(), t.time(), Period::Hour),
        Unit::Day => period_index(t.date(), t.time(), Period::Day),
        Unit::Week => period_index(t.date(), t.time(), Period::Week(WeekStart::Monday)),
        Unit::Month => period_index(t.date(), t.time(), Period::Month),
        Unit::Quarter => period_index(t.date(), t.time(), Period::Quarter),
        Unit::Year => period_index(t.date(), t.time(), Period::Year),
    };
    index(a) - index(&b)
}

fn full_months(later: CivilDate, earlier: CivilDate) -> i64 {
    let years = i64::from(later.year()) - i64::from(earlier.year());
    let months = years * 12 + i64::from(later.month()) - i64::from(earlier.month());
    if later.day() < earlier.day() {
        months - 1
    } else {
        months
    }
}

fn full_years(later: CivilDate, earlier: CivilDate) -> i64 {
    let years = i64::from(later.year()) - i64::from(earlier.year());
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years - 1
    } else {
        years
    }
}
