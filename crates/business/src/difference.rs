//! Counting business days between two instants.

use almanac_calendar::Instant;

use crate::weekend::is_weekend_day;

/// Signed number of business days between `b` and `a`.
///
/// Each instant is reduced to its calendar day in its own zone. Weekdays are
/// counted from the earlier day (inclusive) to the later day (exclusive), and
/// the result is negative when `a` is earlier than `b`. Equal instants give 0.
#[tracing::instrument(level = "trace", skip_all, fields(a = %a, b = %b))]
pub fn difference_in_business_days(a: &Instant, b: &Instant) -> i64 {
    if a == b {
        return 0;
    }
    let (later, earlier, sign) = if a > b { (a, b, 1) } else { (b, a, -1) };
    sign * weekdays_between(earlier.date().to_days(), later.date().to_days())
}

/// Weekdays in the day-number range `[start, end)`.
fn weekdays_between(start: i64, end: i64) -> i64 {
    if end <= start {
        return 0;
    }
    let span = end - start;
    let full_weeks = span / 7;
    let tail_start = start + full_weeks * 7;
    let tail = (tail_start..end).filter(|&day| !is_weekend_day(day)).count() as i64;
    full_weeks * 5 + tail
}
