//! Period boundaries: start, end and last day of a minute through a century.

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::civil::{CivilDate, TimeOfDay, checked_year, days_from_civil};
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::unit::SECONDS_PER_MINUTE;
use crate::weekday::Weekday;

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Returns the weekday that opens the week.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Monday,
            WeekStart::Sunday => Weekday::Sunday,
        }
    }

    /// Days between the start of the week and `weekday` (0..=6).
    pub fn offset_of(self, weekday: Weekday) -> u8 {
        self.weekday().days_until(weekday)
    }
}

/// A civil period that an instant falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Minute,
    Hour,
    Day,
    Week(WeekStart),
    Month,
    Quarter,
    Year,
    /// Years `10k ..= 10k + 9`.
    Decade,
    /// Years `100k + 1 ..= 100k + 100`.
    Century,
}

/// First and last civil day of the day-or-longer period containing `date`.
pub(crate) fn period_days(
    date: CivilDate,
    period: Period,
) -> Result<(CivilDate, CivilDate), CalendarError> {
    let year = date.year();
    match period {
        Period::Minute | Period::Hour | Period::Day => Ok((date, date)),
        Period::Week(start) => {
            let first = date.add_days(-i64::from(start.offset_of(date.weekday())))?;
            Ok((first, first.add_days(6)?))
        }
        Period::Month => Ok((
            CivilDate::from_valid(year, date.month(), 1),
            CivilDate::from_valid(year, date.month(), date.days_in_month()),
        )),
        Period::Quarter => {
            let first_month = (date.quarter() - 1) * 3 + 1;
            let last = if first_month == 10 {
                CivilDate::from_valid(year, 12, 31)
            } else {
                let next = days_from_civil(i64::from(year), i64::from(first_month) + 3, 1);
                CivilDate::from_days(next - 1)?
            };
            Ok((CivilDate::from_valid(year, first_month, 1), last))
        }
        Period::Year => Ok((
            CivilDate::from_valid(year, 1, 1),
            CivilDate::from_valid(year, 12, 31),
        )),
        Period::Decade => {
            let first = i64::from(year).div_euclid(10) * 10;
            years_span(first, first + 9)
        }
        Period::Century => {
            let first = (i64::from(year) - 1).div_euclid(100) * 100 + 1;
            years_span(first, first + 99)
        }
    }
}

fn years_span(first: i64, last: i64) -> Result<(CivilDate, CivilDate), CalendarError> {
    Ok((
        CivilDate::from_valid(checked_year(first)?, 1, 1),
        CivilDate::from_valid(checked_year(last)?, 12, 31),
    ))
}

/// Wall-clock time elapsed since the start of the current minute, or of the
/// current hour when `whole_hour` is set.
fn elapsed_in(instant: &Instant, whole_hour: bool) -> SignedDuration {
    let time = instant.time();
    let minutes = if whole_hour { i64::from(time.minute()) } else { 0 };
    SignedDuration::new(
        minutes * SECONDS_PER_MINUTE + i64::from(time.second()),
        time.nanosecond() as i32,
    )
}

/// Returns the first instant of the period containing `instant`.
///
/// Minute and hour starts keep the instant's own UTC offset, so a time in
/// the repeated hour after clocks fall back stays in that hour.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn start_of(instant: &Instant, period: Period) -> Result<Instant, CalendarError> {
    match period {
        Period::Minute => instant.checked_add(-elapsed_in(instant, false)),
        Period::Hour => instant.checked_add(-elapsed_in(instant, true)),
        _ => {
            let (first, _) = period_days(instant.date(), period)?;
            instant.with_civil(first, TimeOfDay::MIDNIGHT)
        }
    }
}

/// Returns the last nanosecond of the period containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn end_of(instant: &Instant, period: Period) -> Result<Instant, CalendarError> {
    match period {
        Period::Minute => {
            start_of(instant, period)?.checked_add(SignedDuration::new(59, 999_999_999))
        }
        Period::Hour => {
            start_of(instant, period)?.checked_add(SignedDuration::new(3_599, 999_999_999))
        }
        _ => {
            let (_, last) = period_days(instant.date(), period)?;
            instant.with_civil(last, TimeOfDay::LAST_NANOSECOND)
        }
    }
}

/// Returns midnight of the last day of the period containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the day lies outside the supported range.
pub fn last_day_of(instant: &Instant, period: Period) -> Result<Instant, CalendarError> {
    let (_, last) = period_days(instant.date(), period)?;
    instant.with_civil(last, TimeOfDay::MIDNIGHT)
}

/// Rounds to the nearest multiple of `nearest_to` minutes within the hour.
///
/// Only the minute field decides the direction; seconds are dropped.
/// A remainder of exactly half the step rounds up. `nearest_to == 0`
/// returns the instant unchanged.
///
/// # Errors
///
/// Returns [`CalendarError`] if the result lies outside the supported range.
pub fn round_to_nearest_minutes(
    instant: &Instant,
    nearest_to: u32,
) -> Result<Instant, CalendarError> {
    if nearest_to == 0 {
        return Ok(instant.clone());
    }
    let minute = u32::from(instant.minute());
    let remainder = minute % nearest_to;
    let rounded = if remainder * 2 < nearest_to {
        minute - remainder
    } else {
        minute + (nearest_to - remainder)
    };
    let hour = start_of(instant, Period::Hour)?;
    hour.checked_add(SignedDuration::from_secs(
        i64::from(rounded) * SECONDS_PER_MINUTE,
    ))
}

/// Monotonic index of the period containing (date, time).
///
/// Two civil points fall in the same period exactly when their indices are
/// equal, and consecutive periods have consecutive indices.
pub(crate) fn period_index(date: CivilDate, time: TimeOfDay, period: Period) -> i64 {
    let days = date.to_days();
    let year = i64::from(date.year());
    match period {
        Period::Minute => (days * 24 + i64::from(time.hour())) * 60 + i64::from(time.minute()),
        Period::Hour => days * 24 + i64::from(time.hour()),
        Period::Day => days,
        // 1970-01-01 is a Thursday: three days after a Monday, four after a Sunday.
        Period::Week(WeekStart::Monday) => (days + 3).div_euclid(7),
        Period::Week(WeekStart::Sunday) => (days + 4).div_euclid(7),
        Period::Month => year * 12 + i64::from(date.month()) - 1,
        Period::Quarter => year * 4 + i64::from(date.quarter()) - 1,
        Period::Year => year,
        Period::Decade => year.div_euclid(10),
        Period::Century => (year - 1).div_euclid(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::tz::TimeZone;

    fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Instant {
        Instant::from_ymd_hms(year, month, day, hour, minute, second, TimeZone::UTC).unwrap()
    }

    fn civil(t: &Instant) -> (i32, u8, u8, u8, u8, u8, u32) {
        (
            t.year(),
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.nanosecond(),
        )
    }

    #[test]
    fn start_and_end_of_day_like_periods() {
        let t = at(2024, 5, 15, 14, 37, 21);
        assert_eq!(
            civil(&start_of(&t, Period::Minute).unwrap()),
            (2024, 5, 15, 14, 37, 0, 0)
        );
        assert_eq!(
            civil(&end_of(&t, Period::Hour).unwrap()),
            (2024, 5, 15, 14, 59, 59, 999_999_999)
        );
        assert_eq!(
            civil(&start_of(&t, Period::Day).unwrap()),
            (2024, 5, 15, 0, 0, 0, 0)
        );
        assert_eq!(
            civil(&end_of(&t, Period::Day).unwrap()),
            (2024, 5, 15, 23, 59, 59, 999_999_999)
        );
    }

    #[test]
    fn week_boundaries_both_starts() {
        // 2024-05-15 is a Wednesday.
        let t = at(2024, 5, 15, 14, 0, 0);
        let monday = start_of(&t, Period::Week(WeekStart::Monday)).unwrap();
        assert_eq!(civil(&monday), (2024, 5, 13, 0, 0, 0, 0));
        let sunday = start_of(&t, Period::Week(WeekStart::Sunday)).unwrap();
        assert_eq!(civil(&sunday), (2024, 5, 12, 0, 0, 0, 0));
        let end = end_of(&t, Period::Week(WeekStart::Sunday)).unwrap();
        assert_eq!(end.weekday(), Weekday::Saturday);
        assert_eq!(end.day(), 18);
        // A Sunday belongs to the previous Monday-start week.
        let sun = at(2024, 5, 19, 8, 0, 0);
        let start = start_of(&sun, Period::Week(WeekStart::Monday)).unwrap();
        assert_eq!(start.day(), 13);
    }

    #[test]
    fn month_and_quarter_boundaries() {
        let t = at(2024, 2, 10, 5, 0, 0);
        assert_eq!(
            civil(&end_of(&t, Period::Month).unwrap()),
            (2024, 2, 29, 23, 59, 59, 999_999_999)
        );
        assert_eq!(civil(&start_of(&t, Period::Quarter).unwrap()).1, 1);
        assert_eq!(civil(&last_day_of(&t, Period::Quarter).unwrap()), (2024, 3, 31, 0, 0, 0, 0));

        let q2 = at(2023, 5, 31, 0, 0, 0);
        let end = end_of(&q2, Period::Quarter).unwrap();
        assert_eq!((end.month(), end.day()), (6, 30));
        let q4 = at(2023, 11, 2, 0, 0, 0);
        let start = start_of(&q4, Period::Quarter).unwrap();
        assert_eq!((start.month(), start.day()), (10, 1));
        let end = end_of(&q4, Period::Quarter).unwrap();
        assert_eq!((end.year(), end.month(), end.day()), (2023, 12, 31));
    }

    #[test]
    fn decade_and_century() {
        let t = at(1985, 10, 20, 0, 0, 0);
        assert_eq!(civil(&start_of(&t, Period::Decade).unwrap()).0, 1980);
        assert_eq!(
            civil(&end_of(&t, Period::Decade).unwrap()),
            (1989, 12, 31, 23, 59, 59, 999_999_999)
        );
        assert_eq!(civil(&start_of(&t, Period::Century).unwrap()).0, 1901);
        assert_eq!(
            civil(&last_day_of(&t, Period::Century).unwrap()),
            (2000, 12, 31, 0, 0, 0, 0)
        );
        // 2000 is the last year of the 20th century.
        let y2k = at(2000, 6, 1, 0, 0, 0);
        assert_eq!(start_of(&y2k, Period::Century).unwrap().year(), 1901);
        let y2001 = at(2001, 1, 1, 0, 0, 0);
        assert_eq!(start_of(&y2001, Period::Century).unwrap().year(), 2001);
    }

    #[test]
    fn century_past_supported_range() {
        let t = at(9999, 1, 1, 0, 0, 0);
        assert_eq!(
            end_of(&t, Period::Century).unwrap_err(),
            CalendarError::YearOutOfRange { year: 10000 }
        );
    }

    #[test]
    fn rounding_minutes() {
        let down = round_to_nearest_minutes(&at(2014, 6, 10, 12, 7, 30), 5).unwrap();
        assert_eq!(civil(&down), (2014, 6, 10, 12, 5, 0, 0));
        let up = round_to_nearest_minutes(&at(2014, 6, 10, 12, 8, 30), 5).unwrap();
        assert_eq!(civil(&up), (2014, 6, 10, 12, 10, 0, 0));
        let half = round_to_nearest_minutes(&at(2014, 6, 10, 12, 15, 0), 30).unwrap();
        assert_eq!(civil(&half), (2014, 6, 10, 12, 30, 0, 0));
        let unchanged = at(2014, 6, 10, 12, 8, 30);
        assert_eq!(round_to_nearest_minutes(&unchanged, 0).unwrap(), unchanged);
    }

    #[test]
    fn rounding_carries_into_next_day() {
        let t = at(2024, 12, 31, 23, 58, 0);
        let rounded = round_to_nearest_minutes(&t, 15).unwrap();
        assert_eq!(civil(&rounded), (2025, 1, 1, 0, 0, 0, 0));
    }

    #[test]
    fn period_index_is_consecutive() {
        let date = CivilDate::new(2023, 12, 31).unwrap();
        let next = CivilDate::new(2024, 1, 1).unwrap();
        let t = TimeOfDay::MIDNIGHT;
        assert_eq!(period_index(next, t, Period::Day), period_index(date, t, Period::Day) + 1);
        assert_eq!(
            period_index(next, t, Period::Month),
            period_index(date, t, Period::Month) + 1
        );
        // Sunday 2023-12-31 and Monday 2024-01-01.
        assert_eq!(
            period_index(next, t, Period::Week(WeekStart::Monday)),
            period_index(date, t, Period::Week(WeekStart::Monday)) + 1
        );
        assert_eq!(
            period_index(next, t, Period::Week(WeekStart::Sunday)),
            period_index(date, t, Period::Week(WeekStart::Sunday))
        );
    }

    #[test]
    fn week_start_offsets() {
        assert_eq!(WeekStart::Monday.offset_of(Weekday::Sunday), 6);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Sunday), 0);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Saturday), 6);
        assert_eq!(WeekStart::default(), WeekStart::Monday);
    }

    fn new_york() -> TimeZone {
        TimeZone::get("America/New_York").unwrap()
    }

    #[test]
    fn minute_and_hour_keep_offset_in_repeated_hour() {
        // 2024-11-03 06:10:30 UTC is 01:10:30 EST, the second 01:10:30 that day.
        let t = at(2024, 11, 3, 6, 10, 30).in_time_zone(&new_york());
        assert_eq!(t.offset_seconds(), -5 * 3600);
        for (period, length) in [(Period::Minute, 60), (Period::Hour, 3600)] {
            let start = start_of(&t, period).unwrap();
            let end = end_of(&t, period).unwrap();
            assert!(start <= t && t <= end, "{period:?}");
            assert!(t.duration_since(&start).as_secs() < length, "{period:?}");
            assert_eq!(start.offset_seconds(), -5 * 3600, "{period:?}");
            assert_eq!(end.duration_since(&start), SignedDuration::new(length - 1, 999_999_999));
        }
        assert_eq!(civil(&start_of(&t, Period::Hour).unwrap()), (2024, 11, 3, 1, 0, 0, 0));
        let rounded = round_to_nearest_minutes(&t, 15).unwrap();
        assert_eq!((rounded.hour(), rounded.minute()), (1, 15));
        assert_eq!(rounded.offset_seconds(), -5 * 3600);
    }

    #[test]
    fn day_boundaries_across_dst_changes() {
        let ny = new_york();
        let spring = Instant::from_ymd_hms(2024, 3, 10, 15, 0, 0, ny.clone()).unwrap();
        let start = start_of(&spring, Period::Day).unwrap();
        let end = end_of(&spring, Period::Day).unwrap();
        assert_eq!(civil(&start), (2024, 3, 10, 0, 0, 0, 0));
        assert_eq!(civil(&end), (2024, 3, 10, 23, 59, 59, 999_999_999));
        assert_eq!(end.duration_since(&start), SignedDuration::new(23 * 3600 - 1, 999_999_999));

        let fall = Instant::from_ymd_hms(2024, 11, 3, 15, 0, 0, ny).unwrap();
        let start = start_of(&fall, Period::Day).unwrap();
        let end = end_of(&fall, Period::Day).unwrap();
        assert_eq!(civil(&start), (2024, 11, 3, 0, 0, 0, 0));
        assert_eq!(end.duration_since(&start), SignedDuration::new(25 * 3600 - 1, 999_999_999));
    }

    #[test]
    fn hour_after_spring_gap() {
        // 03:20 EDT on 2024-03-10; the hour starting at 02:00 does not exist.
        let t = Instant::from_ymd_hms(2024, 3, 10, 3, 20, 0, new_york()).unwrap();
        let start = start_of(&t, Period::Hour).unwrap();
        assert_eq!(civil(&start), (2024, 3, 10, 3, 0, 0, 0));
        assert_eq!(t.duration_since(&start).as_secs(), 20 * 60);
    }
}
