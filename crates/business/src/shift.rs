//! Shifting by business days.

use almanac_calendar::{CalendarError, CivilDate, Instant, Unit};
use tracing::trace;

use crate::weekend::{WeekendPolicy, is_weekend_day};

/// Business days in a full week.
const WEEKDAYS_PER_WEEK: u64 = 5;

/// Moves `n` business days, snapping a weekend start in the direction of
/// travel. Time of day and zone are kept; `n == 0` returns the instant
/// unchanged.
///
/// # Errors
///
/// Returns [`CalendarError`] if the target date is unrepresentable.
pub fn shift_business_days(instant: &Instant, n: i64) -> Result<Instant, CalendarError> {
    shift_business_days_with(instant, n, WeekendPolicy::SnapInDirection)
}

/// Moves `n` business days using the given weekend-start policy.
///
/// Whole weeks are skipped in one step, so the walk costs at most a few
/// days regardless of `n`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the target date is unrepresentable.
#[tracing::instrument(level = "trace", skip(instant), fields(start = %instant))]
pub fn shift_business_days_with(
    instant: &Instant,
    n: i64,
    policy: WeekendPolicy,
) -> Result<Instant, CalendarError> {
    if n == 0 {
        return Ok(instant.clone());
    }
    let overflow = || CalendarError::Overflow {
        unit: Unit::Day,
        amount: n,
    };
    let step = n.signum();
    let mut remaining = n.unsigned_abs();
    let mut day = instant.date().to_days();

    if is_weekend_day(day) {
        match policy {
            WeekendPolicy::SnapInDirection => {
                while is_weekend_day(day) {
                    day += step;
                }
                trace!(day, "snapped weekend start");
            }
            WeekendPolicy::CountFromWeekend => {
                day += step;
                while is_weekend_day(day) {
                    day += step;
                }
                remaining -= 1;
            }
        }
    }

    let weeks = i64::try_from(remaining / WEEKDAYS_PER_WEEK).map_err(|_| overflow())?;
    let skip = weeks
        .checked_mul(7 * step)
        .and_then(|days| day.checked_add(days))
        .ok_or_else(overflow)?;
    day = skip;
    remaining %= WEEKDAYS_PER_WEEK;

    while remaining > 0 {
        day = day.checked_add(step).ok_or_else(overflow)?;
        if !is_weekend_day(day) {
            remaining -= 1;
        }
    }

    let date = CivilDate::from_days(day)?;
    Instant::new(date, instant.time(), instant.time_zone().clone())
}
