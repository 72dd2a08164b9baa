//! Approximate distance buckets ("about 2 hours", "over 1 year").

use std::fmt;

use almanac_calendar::{Instant, Unit, difference_in};

use crate::options::DistanceOptions;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;
/// 1.75 days.
const ONE_DAY_LIMIT: i64 = 2_520;
/// 30 days.
const ONE_MONTH_START: i64 = 43_200;
/// 60 days.
const MONTHS_START: i64 = 86_400;

/// An approximate distance, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApproxDistance {
    /// "less than N seconds" for N in 5, 10 and 20.
    LessThanSeconds(u8),
    HalfAMinute,
    LessThanAMinute,
    /// "1 minute" or "N minutes".
    Minutes(i64),
    /// "about 1 hour" or "about N hours".
    AboutHours(i64),
    /// "1 day" or "N days".
    Days(i64),
    /// "about 1 month".
    AboutOneMonth,
    /// "N months" for 2 through 11.
    Months(i64),
    /// "about N years": fewer than 3 months past the last full year.
    AboutYears(i64),
    /// "over N years": 3 to 8 months past the last full year.
    OverYears(i64),
    /// "almost N years": 9 or more months past the last full year.
    AlmostYears(i64),
}

fn plural(f: &mut fmt::Formatter<'_>, count: i64, unit: &str) -> fmt::Result {
    if count == 1 {
        write!(f, "1 {unit}")
    } else {
        write!(f, "{count} {unit}s")
    }
}

impl fmt::Display for ApproxDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ApproxDistance::LessThanSeconds(n) => write!(f, "less than {n} seconds"),
            ApproxDistance::HalfAMinute => f.write_str("half a minute"),
            ApproxDistance::LessThanAMinute => f.write_str("less than a minute"),
            ApproxDistance::Minutes(n) => plural(f, n, "minute"),
            ApproxDistance::AboutHours(n) => {
                f.write_str("about ")?;
                plural(f, n, "hour")
            }
            ApproxDistance::Days(n) => plural(f, n, "day"),
            ApproxDistance::AboutOneMonth => f.write_str("about 1 month"),
            ApproxDistance::Months(n) => plural(f, n, "month"),
            ApproxDistance::AboutYears(n) => {
                f.write_str("about ")?;
                plural(f, n, "year")
            }
            ApproxDistance::OverYears(n) => {
                f.write_str("over ")?;
                plural(f, n, "year")
            }
            ApproxDistance::AlmostYears(n) => {
                f.write_str("almost ")?;
                plural(f, n, "year")
            }
        }
    }
}

/// Integer division rounding halves away from zero, for non-negative input.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Buckets the distance between `a` and `b` into an approximate phrase.
///
/// Minutes are whole elapsed seconds divided by 60, rounded. Distances of
/// 60 days or more count full calendar months.
pub fn approximate_distance(a: &Instant, b: &Instant, options: &DistanceOptions) -> ApproxDistance {
    let (later, earlier) = if a > b { (a, b) } else { (b, a) };
    let seconds = later.duration_since(earlier).as_secs();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        if options.include_seconds() {
            return match seconds {
                0..5 => ApproxDistance::LessThanSeconds(5),
                5..10 => ApproxDistance::LessThanSeconds(10),
                10..20 => ApproxDistance::LessThanSeconds(20),
                20..40 => ApproxDistance::HalfAMinute,
                40..60 => ApproxDistance::LessThanAMinute,
                _ => ApproxDistance::Minutes(1),
            };
        }
        return if minutes == 0 {
            ApproxDistance::LessThanAMinute
        } else {
            ApproxDistance::Minutes(1)
        };
    }
    if minutes < 45 {
        return ApproxDistance::Minutes(minutes);
    }
    if minutes < 90 {
        return ApproxDistance::AboutHours(1);
    }
    if minutes < MINUTES_PER_DAY {
        return ApproxDistance::AboutHours(round_div(minutes, MINUTES_PER_HOUR));
    }
    if minutes < ONE_DAY_LIMIT {
        return ApproxDistance::Days(1);
    }
    if minutes < ONE_MONTH_START {
        return ApproxDistance::Days(round_div(minutes, MINUTES_PER_DAY));
    }
    if minutes < MONTHS_START {
        return ApproxDistance::AboutOneMonth;
    }

    let months = difference_in(later, earlier, Unit::Month);
    if months < 12 {
        return if months <= 1 {
            ApproxDistance::AboutOneMonth
        } else {
            ApproxDistance::Months(months)
        };
    }
    let years = months / 12;
    match months % 12 {
        0..3 => ApproxDistance::AboutYears(years),
        3..9 => ApproxDistance::OverYears(years),
        _ => ApproxDistance::AlmostYears(years + 1),
    }
}
