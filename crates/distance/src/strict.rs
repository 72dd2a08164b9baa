//! Strict distances: one unit, floored, no qualifiers.

use std::fmt;

use almanac_calendar::{
    Instant, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK, Unit,
    difference_in,
};

/// Average Gregorian month (30.436875 days).
const SECONDS_PER_AVERAGE_MONTH: i64 = 2_629_746;
/// Average Gregorian year (365.2425 days).
const SECONDS_PER_AVERAGE_YEAR: i64 = 31_556_952;

/// A whole number of a single unit, rendered as "1 unit" or "N units".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrictDistance {
    count: i64,
    unit: Unit,
}

impl StrictDistance {
    /// Returns the floored number of units.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Returns the unit the distance is expressed in.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for StrictDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "1 {}", self.unit)
        } else {
            write!(f, "{} {}s", self.count, self.unit)
        }
    }
}

/// Expresses the distance between `a` and `b` in the largest fitting unit.
///
/// Thresholds are a minute, an hour, a day, a week, an average month and an
/// average year of elapsed seconds. Months and years count full calendar
/// units; when that count is zero the next smaller unit is used instead.
pub fn strict_distance(a: &Instant, b: &Instant) -> StrictDistance {
    let (later, earlier) = if a > b { (a, b) } else { (b, a) };
    let seconds = later.duration_since(earlier).as_secs();
    let fixed = |unit: Unit, length: i64| StrictDistance {
        count: seconds / length,
        unit,
    };

    if seconds < SECONDS_PER_MINUTE {
        return fixed(Unit::Second, 1);
    }
    if seconds < SECONDS_PER_HOUR {
        return fixed(Unit::Minute, SECONDS_PER_MINUTE);
    }
    if seconds < SECONDS_PER_DAY {
        return fixed(Unit::Hour, SECONDS_PER_HOUR);
    }
    if seconds < SECONDS_PER_WEEK {
        return fixed(Unit::Day, SECONDS_PER_DAY);
    }
    let weeks = fixed(Unit::Week, SECONDS_PER_WEEK);
    if seconds < SECONDS_PER_AVERAGE_MONTH {
        return weeks;
    }
    let months = difference_in(later, earlier, Unit::Month);
    let in_months = if months > 0 {
        StrictDistance {
            count: months,
            unit: Unit::Month,
        }
    } else {
        weeks
    };
    if seconds < SECONDS_PER_AVERAGE_YEAR {
        return in_months;
    }
    match difference_in(later, earlier, Unit::Year) {
        0 => in_months,
        years => StrictDistance {
            count: years,
            unit: Unit::Year,
        },
    }
}
