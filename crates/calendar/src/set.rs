//! Replacing a single civil field.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::civil::{CivilDate, TimeOfDay, checked_year, days_from_civil, days_in_year};
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::shift::shift_calendar_days;

/// A civil field that [`set_field`] can replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Year,
    Month,
    Quarter,
    DayOfMonth,
    DayOfYear,
    /// ISO weekday number, Monday = 1 through Sunday = 7.
    Weekday,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Returns `instant` with one civil field replaced.
///
/// Out-of-range values are clamped to the field's valid range instead of
/// rolling over into the next field. A day of month that does not exist in
/// the resulting month is clamped to its last day. Setting the weekday moves
/// to the matching day within three days either side of the current one.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when setting an unsupported
/// year, or [`CalendarError::Civil`] if the clock rejects the result.
pub fn set_field(instant: &Instant, field: Field, value: i64) -> Result<Instant, CalendarError> {
    let date = instant.date();
    let time = instant.time();
    match field {
        Field::Year => {
            let year = checked_year(value)?;
            instant.with_date(CivilDate::clamped(year, date.month(), i64::from(date.day())))
        }
        Field::Month => set_month(instant, clamp(value, 1, 12) as u8),
        Field::Quarter => {
            let quarter = clamp(value, 1, 4) as u8;
            set_month(instant, (quarter - 1) * 3 + 1)
        }
        Field::DayOfMonth => {
            instant.with_date(CivilDate::clamped(date.year(), date.month(), value))
        }
        Field::DayOfYear => {
            let ordinal = clamp(value, 1, i64::from(days_in_year(date.year())));
            let jan1 = days_from_civil(i64::from(date.year()), 1, 1);
            instant.with_date(CivilDate::from_days(jan1 + ordinal - 1)?)
        }
        Field::Weekday => {
            let target = clamp(value, 1, 7);
            let current = i64::from(date.weekday().iso_number());
            let mut diff = target - current;
            if diff < -3 {
                diff += 7;
            } else if diff > 3 {
                diff -= 7;
            }
            shift_calendar_days(instant, diff)
        }
        Field::Hour => instant.with_time(TimeOfDay::from_valid(
            clamp(value, 0, 23) as u8,
            time.minute(),
            time.second(),
            time.nanosecond(),
        )),
        Field::Minute => instant.with_time(TimeOfDay::from_valid(
            time.hour(),
            clamp(value, 0, 59) as u8,
            time.second(),
            time.nanosecond(),
        )),
        Field::Second => instant.with_time(TimeOfDay::from_valid(
            time.hour(),
            time.minute(),
            clamp(value, 0, 59) as u8,
            time.nanosecond(),
        )),
        Field::Millisecond => {
            let millis = clamp(value, 0, 999) as u32;
            instant.with_time(TimeOfDay::from_valid(
                time.hour(),
                time.minute(),
                time.second(),
                millis * 1_000_000 + time.nanosecond() % 1_000_000,
            ))
        }
    }
}

fn set_month(instant: &Instant, month: u8) -> Result<Instant, CalendarError> {
    let date = instant.date();
    instant.with_date(CivilDate::clamped(date.year(), month, i64::from(date.day())))
}

fn clamp(value: i64, min: i64, max: i64) -> i64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        trace!(value, clamped, "clamped field value");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use jiff::tz::TimeZone;

    fn utc(year: i32, month: u8, day: u8) -> Instant {
        Instant::from_ymd_hms(year, month, day, 9, 30, 0, TimeZone::UTC).unwrap()
    }

    fn ymd(t: &Instant) -> (i32, u8, u8) {
        (t.year(), t.month(), t.day())
    }

    #[test]
    fn set_year_clamps_leap_day() {
        let t = utc(2024, 2, 29);
        assert_eq!(ymd(&set_field(&t, Field::Year, 2023).unwrap()), (2023, 2, 28));
        assert_eq!(ymd(&set_field(&t, Field::Year, 2020).unwrap()), (2020, 2, 29));
        assert_eq!(
            set_field(&t, Field::Year, 12_000).unwrap_err(),
            CalendarError::YearOutOfRange { year: 12_000 }
        );
    }

    #[test]
    fn set_month_clamps_value_and_day() {
        let t = utc(2023, 3, 31);
        assert_eq!(ymd(&set_field(&t, Field::Month, 2).unwrap()), (2023, 2, 28));
        assert_eq!(ymd(&set_field(&t, Field::Month, 0).unwrap()), (2023, 1, 31));
        assert_eq!(ymd(&set_field(&t, Field::Month, 13).unwrap()), (2023, 12, 31));
    }

    #[test]
    fn set_quarter_moves_to_first_month() {
        let t = utc(2023, 5, 31);
        assert_eq!(ymd(&set_field(&t, Field::Quarter, 3).unwrap()), (2023, 7, 31));
        assert_eq!(ymd(&set_field(&t, Field::Quarter, 2).unwrap()), (2023, 4, 30));
        assert_eq!(ymd(&set_field(&t, Field::Quarter, 9).unwrap()), (2023, 10, 31));
    }

    #[test]
    fn set_day_of_month_clamps() {
        let t = utc(2023, 2, 10);
        assert_eq!(ymd(&set_field(&t, Field::DayOfMonth, 31).unwrap()), (2023, 2, 28));
        assert_eq!(ymd(&set_field(&t, Field::DayOfMonth, -4).unwrap()), (2023, 2, 1));
        assert_eq!(ymd(&set_field(&t, Field::DayOfMonth, 15).unwrap()), (2023, 2, 15));
    }

    #[test]
    fn set_day_of_year() {
        let t = utc(2024, 6, 1);
        assert_eq!(ymd(&set_field(&t, Field::DayOfYear, 60).unwrap()), (2024, 2, 29));
        assert_eq!(ymd(&set_field(&t, Field::DayOfYear, 400).unwrap()), (2024, 12, 31));
        assert_eq!(ymd(&set_field(&t, Field::DayOfYear, 0).unwrap()), (2024, 1, 1));
        let common = utc(2023, 6, 1);
        assert_eq!(ymd(&set_field(&common, Field::DayOfYear, 366).unwrap()), (2023, 12, 31));
    }

    #[test]
    fn set_weekday_nearest() {
        // 2024-01-10 is a Wednesday.
        let wed = utc(2024, 1, 10);
        let mon = set_field(&wed, Field::Weekday, 1).unwrap();
        assert_eq!(ymd(&mon), (2024, 1, 8));
        let sat = set_field(&wed, Field::Weekday, 6).unwrap();
        assert_eq!(ymd(&sat), (2024, 1, 13));
        // Sunday is 4 days ahead, so the previous one (3 days back) wins.
        let sun = set_field(&wed, Field::Weekday, 7).unwrap();
        assert_eq!(ymd(&sun), (2024, 1, 7));
        assert_eq!(sun.weekday(), Weekday::Sunday);
        assert_eq!((sun.hour(), sun.minute()), (9, 30));
    }

    #[test]
    fn set_time_fields_clamp() {
        let t = utc(2024, 1, 10);
        assert_eq!(set_field(&t, Field::Hour, 25).unwrap().hour(), 23);
        assert_eq!(set_field(&t, Field::Hour, -1).unwrap().hour(), 0);
        assert_eq!(set_field(&t, Field::Minute, 61).unwrap().minute(), 59);
        assert_eq!(set_field(&t, Field::Second, 7).unwrap().second(), 7);
        let h = set_field(&t, Field::Hour, 5).unwrap();
        assert_eq!(ymd(&h), (2024, 1, 10));
        assert_eq!(h.minute(), 30);
    }

    #[test]
    fn set_millisecond_keeps_sub_millisecond() {
        let date = CivilDate::new(2024, 1, 1).unwrap();
        let time = TimeOfDay::new(0, 0, 0, 1_234_567).unwrap();
        let t = Instant::new(date, time, TimeZone::UTC).unwrap();
        let set = set_field(&t, Field::Millisecond, 500).unwrap();
        assert_eq!(set.nanosecond(), 500_234_567);
        assert_eq!(set_field(&t, Field::Millisecond, 5000).unwrap().millisecond(), 999);
    }

    #[test]
    fn set_minute_in_repeated_hour_keeps_offset() {
        let ny = TimeZone::get("America/New_York").unwrap();
        // 2024-11-03 06:10:00 UTC is 01:10 EST, after clocks fell back.
        let t = Instant::from_ymd_hms(2024, 11, 3, 6, 10, 0, TimeZone::UTC)
            .unwrap()
            .in_time_zone(&ny);
        let set = set_field(&t, Field::Minute, 40).unwrap();
        assert_eq!((set.hour(), set.minute()), (1, 40));
        assert_eq!(set.offset_seconds(), -5 * 3600);
        assert_eq!(set.duration_since(&t).as_secs(), 30 * 60);
    }
}
