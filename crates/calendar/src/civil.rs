//! Proleptic Gregorian civil dates, wall-clock times and the leap-year rule.

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Earliest supported year.
pub const MIN_YEAR: i32 = -9999;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days of a common year elapsed before the first of each month (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Day number of -9999-01-01.
const MIN_DAYS: i64 = days_from_civil(MIN_YEAR as i64, 1, 1);

/// Day number of 9999-12-31.
const MAX_DAYS: i64 = days_from_civil(MAX_YEAR as i64, 12, 31);

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Every days-in-month, days-in-year and clamping computation in the
/// workspace goes through this predicate.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in the given month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// Month length for an already validated month.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for an unvalidated (year, month, day) triple.
///
/// Month must be in 1..=12; the day may run past the end of the month, in
/// which case the result continues into the following month.
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Converts a wide year into the supported range.
pub(crate) fn checked_year(year: i64) -> Result<i32, CalendarError> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        Ok(year as i32)
    } else {
        Err(CalendarError::YearOutOfRange { year })
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// Years are limited to `MIN_YEAR..=MAX_YEAR`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
    /// or [`CalendarError::InvalidDay`] for values that do not name a date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = checked_year(i64::from(year))?;
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose day is clamped into the month: values below 1
    /// become 1 and values past the end become the last day.
    ///
    /// `year` must already be in range and `month` in 1..=12.
    pub(crate) fn clamped(year: i32, month: u8, day: i64) -> Self {
        let last = month_length(year, month);
        let day = day.clamp(1, i64::from(last)) as u8;
        Self { year, month, day }
    }

    /// Wraps components already validated by the clock.
    pub(crate) fn from_valid(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(CivilDate::new(year, month, day).is_ok());
        Self { year, month, day }
    }

    /// Creates the date `days` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] outside the supported years.
    pub fn from_days(days: i64) -> Result<Self, CalendarError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(CalendarError::DateOutOfRange { days });
        }
        let (year, month, day) = civil_from_days(days);
        Ok(Self {
            year: year as i32,
            month,
            day,
        })
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn to_days(self) -> i64 {
        days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Returns the date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if the result leaves the
    /// supported years.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        let days = self
            .to_days()
            .checked_add(n)
            .ok_or(CalendarError::DateOutOfRange { days: i64::MAX })?;
        Self::from_days(days)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_days_since_epoch(self.to_days())
    }

    /// Returns the ordinal day of the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        let leap_day = u16::from(self.month > 2 && is_leap_year(self.year));
        DAYS_BEFORE_MONTH[self.month as usize] + leap_day + u16::from(self.day)
    }

    /// Returns the quarter of the year (1..=4).
    pub fn quarter(self) -> u8 {
        (self.month - 1) / 3 + 1
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        month_length(self.year, self.month)
    }
}

/// A wall-clock time of day with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    /// 23:59:59.999999999, the last representable instant of a day.
    pub const LAST_NANOSECOND: Self = Self {
        hour: 23,
        minute: 59,
        second: 59,
        nanosecond: 999_999_999,
    };

    /// Creates a new time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                nanosecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Wraps components already validated by the clock.
    pub(crate) fn from_valid(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        debug_assert!(TimeOfDay::new(hour, minute, second, nanosecond).is_ok());
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the sub-second fraction in nanoseconds.
    pub fn nanosecond(self) -> u32 {
        self.nanosecond
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn days_in_month_follows_leap_rule() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 4).unwrap(), 30);
        assert_eq!(days_in_month(2023, 12).unwrap(), 31);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(2023, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2023, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn days_in_year_values() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(1900), 365);
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(CivilDate::new(1970, 1, 1).unwrap().to_days(), 0);
        assert_eq!(CivilDate::new(1969, 12, 31).unwrap().to_days(), -1);
        assert_eq!(CivilDate::new(2000, 3, 1).unwrap().to_days(), 11_017);
    }

    #[test]
    fn from_days_roundtrip_over_leap_cycles() {
        // Two full 400-year cycles around the epoch.
        for days in (-146_097..146_097).step_by(37) {
            let date = CivilDate::from_days(days).unwrap();
            assert_eq!(date.to_days(), days, "roundtrip failed for {date:?}");
        }
    }

    #[test]
    fn from_days_consecutive_dates() {
        let mut prev = CivilDate::from_days(-800).unwrap();
        for days in -799..800 {
            let date = CivilDate::from_days(days).unwrap();
            assert!(date > prev);
            if date.day() == 1 {
                assert_eq!(prev.day(), prev.days_in_month());
            } else {
                assert_eq!(date.day(), prev.day() + 1);
            }
            prev = date;
        }
    }

    #[test]
    fn supported_range_edges() {
        assert!(CivilDate::new(MIN_YEAR, 1, 1).is_ok());
        assert!(CivilDate::new(MAX_YEAR, 12, 31).is_ok());
        assert_eq!(
            CivilDate::new(10_000, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 10_000 }
        );
        let last = CivilDate::new(MAX_YEAR, 12, 31).unwrap();
        assert!(matches!(
            last.add_days(1),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn new_rejects_invalid_day() {
        assert_eq!(
            CivilDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn clamped_day() {
        assert_eq!(CivilDate::clamped(2023, 2, 31).day(), 28);
        assert_eq!(CivilDate::clamped(2024, 2, 31).day(), 29);
        assert_eq!(CivilDate::clamped(2024, 4, -3).day(), 1);
        assert_eq!(CivilDate::clamped(2024, 4, 15).day(), 15);
    }

    #[test]
    fn day_of_year_values() {
        assert_eq!(CivilDate::new(2023, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CivilDate::new(2023, 3, 1).unwrap().day_of_year(), 60);
        assert_eq!(CivilDate::new(2024, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(CivilDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
    }

    #[test]
    fn quarter_values() {
        let quarters: Vec<u8> = (1..=12)
            .map(|m| CivilDate::new(2024, m, 1).unwrap().quarter())
            .collect();
        assert_eq!(quarters, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(CivilDate::new(1970, 1, 1).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(CivilDate::new(2024, 2, 29).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(CivilDate::new(1969, 12, 29).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn time_of_day_validation() {
        assert!(TimeOfDay::new(23, 59, 59, 999_999_999).is_ok());
        assert_eq!(
            TimeOfDay::new(24, 0, 0, 0).unwrap_err(),
            CalendarError::InvalidTime {
                hour: 24,
                minute: 0,
                second: 0,
                nanosecond: 0,
            }
        );
        assert!(TimeOfDay::new(0, 60, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn table_integrity_days_before_month() {
        for m in 1..12usize {
            assert_eq!(
                DAYS_BEFORE_MONTH[m] + u16::from(DAYS_PER_MONTH[m]),
                DAYS_BEFORE_MONTH[m + 1],
                "DAYS_BEFORE_MONTH mismatch at month {m}"
            );
        }
    }
}
