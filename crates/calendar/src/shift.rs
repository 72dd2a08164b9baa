//! Adding and subtracting civil units.

use jiff::SignedDuration;
use tracing::trace;

use crate::civil::{CivilDate, checked_year};
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::unit::Unit;

/// Shifts `instant` by `amount` units (negative amounts move backwards).
///
/// Second, minute, hour, day and week are exact absolute durations, so a day
/// shift across a DST change keeps the elapsed time rather than the wall
/// clock. Month, quarter and year shifts keep the wall clock and clamp the
/// day of month to the end of the target month.
///
/// # Errors
///
/// Returns [`CalendarError::Overflow`] if the shift cannot be represented,
/// or [`CalendarError::YearOutOfRange`] if a calendar shift leaves the
/// supported years.
pub fn shift(instant: &Instant, unit: Unit, amount: i64) -> Result<Instant, CalendarError> {
    match unit {
        Unit::Month => add_months(instant, amount),
        Unit::Quarter => {
            let months = amount
                .checked_mul(3)
                .ok_or(CalendarError::Overflow { unit, amount })?;
            add_months(instant, months)
        }
        Unit::Year => add_years(instant, amount),
        _ => {
            let overflow = CalendarError::Overflow { unit, amount };
            let length = unit.seconds().ok_or_else(|| overflow.clone())?;
            let seconds = amount.checked_mul(length).ok_or_else(|| overflow.clone())?;
            instant
                .checked_add(SignedDuration::from_secs(seconds))
                .map_err(|_| overflow)
        }
    }
}

/// Shifts by whole calendar months, clamping the day to the target month.
///
/// # Errors
///
/// Returns [`CalendarError`] if the target year is unrepresentable.
pub fn add_months(instant: &Instant, amount: i64) -> Result<Instant, CalendarError> {
    let date = instant.date();
    let (year, month) = offset_month(date.year(), date.month(), amount)?;
    let target = CivilDate::clamped(year, month, i64::from(date.day()));
    if target.day() != date.day() {
        trace!(
            from = date.day(),
            to = target.day(),
            year,
            month,
            "clamped day of month"
        );
    }
    instant.with_date(target)
}

/// Shifts by whole years; February 29 becomes February 28 in a common year.
///
/// # Errors
///
/// Returns [`CalendarError`] if the target year is unrepresentable.
pub fn add_years(instant: &Instant, amount: i64) -> Result<Instant, CalendarError> {
    let date = instant.date();
    let year = i64::from(date.year())
        .checked_add(amount)
        .ok_or(CalendarError::Overflow {
            unit: Unit::Year,
            amount,
        })?;
    let year = checked_year(year)?;
    let target = CivilDate::clamped(year, date.month(), i64::from(date.day()));
    if target.day() != date.day() {
        trace!(year, "clamped leap day");
    }
    instant.with_date(target)
}

/// Moves `n` calendar days, keeping the wall-clock time.
///
/// Unlike a [`Unit::Day`] shift this lands on the same local time even when
/// a DST transition lies in between.
///
/// # Errors
///
/// Returns [`CalendarError`] if the target date is unrepresentable.
pub fn shift_calendar_days(instant: &Instant, n: i64) -> Result<Instant, CalendarError> {
    if n == 0 {
        return Ok(instant.clone());
    }
    let date = instant.date().add_days(n)?;
    instant.with_date(date)
}

/// Returns the (year, month) `amount` months after (year, month).
pub(crate) fn offset_month(year: i32, month: u8, amount: i64) -> Result<(i32, u8), CalendarError> {
    let overflow = CalendarError::Overflow {
        unit: Unit::Month,
        amount,
    };
    let index = i64::from(year) * 12 + i64::from(month) - 1;
    let index = index.checked_add(amount).ok_or(overflow)?;
    let year = checked_year(index.div_euclid(12))?;
    let month = index.rem_euclid(12) as u8 + 1;
    Ok((year, month))
}
