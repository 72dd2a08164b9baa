//! Days of the week and next/previous weekday lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::instant::Instant;
use crate::shift::shift_calendar_days;

/// Day of the week, numbered Monday = 1 through Sunday = 7 (ISO 8601).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All weekdays in ISO order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the weekday with ISO number `n` (Monday = 1 .. Sunday = 7).
    pub fn from_iso_number(n: u8) -> Option<Weekday> {
        match n {
            1..=7 => Some(Self::ALL[usize::from(n - 1)]),
            _ => None,
        }
    }

    /// Returns the ISO number (Monday = 1 .. Sunday = 7).
    pub fn iso_number(self) -> u8 {
        self as u8
    }

    /// Returns the number counted from Sunday (Sunday = 0 .. Saturday = 6).
    pub fn number_from_sunday(self) -> u8 {
        self.iso_number() % 7
    }

    /// Returns how many days forward `other` is from `self` (0..=6).
    pub fn days_until(self, other: Weekday) -> u8 {
        (other.iso_number() + 7 - self.iso_number()) % 7
    }

    /// Weekday of the day `days` days after 1970-01-01 (a Thursday).
    pub fn from_days_since_epoch(days: i64) -> Weekday {
        // Monday-based index: 1970-01-01 sits at index 3.
        let index = (days + 3).rem_euclid(7) as usize;
        Self::ALL[index]
    }

    /// Returns the English name of the weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search direction for [`relative_weekday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Strictly after the given instant.
    Next,
    /// Strictly before the given instant.
    Previous,
}

/// Returns the next or previous occurrence of `weekday`, keeping the time of day.
///
/// The search is strict: asking for the next Monday from a Monday moves a
/// full week forward.
///
/// # Errors
///
/// Returns [`CalendarError`] if the result leaves the supported range.
pub fn relative_weekday(
    instant: &Instant,
    weekday: Weekday,
    direction: Direction,
) -> Result<Instant, CalendarError> {
    let current = instant.weekday();
    let days = match direction {
        Direction::Next => match current.days_until(weekday) {
            0 => 7,
            n => i64::from(n),
        },
        Direction::Previous => match weekday.days_until(current) {
            0 => -7,
            n => -i64::from(n),
        },
    };
    shift_calendar_days(instant, days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::tz::TimeZone;

    fn utc(year: i32, month: u8, day: u8) -> Instant {
        Instant::from_ymd_hms(year, month, day, 10, 30, 0, TimeZone::UTC).unwrap()
    }

    #[test]
    fn iso_numbering_roundtrip() {
        for n in 1..=7 {
            assert_eq!(Weekday::from_iso_number(n).unwrap().iso_number(), n);
        }
        assert_eq!(Weekday::from_iso_number(0), None);
        assert_eq!(Weekday::from_iso_number(8), None);
    }

    #[test]
    fn sunday_based_numbering() {
        assert_eq!(Weekday::Sunday.number_from_sunday(), 0);
        assert_eq!(Weekday::Monday.number_from_sunday(), 1);
        assert_eq!(Weekday::Saturday.number_from_sunday(), 6);
    }

    #[test]
    fn days_until_wraps() {
        assert_eq!(Weekday::Friday.days_until(Weekday::Monday), 3);
        assert_eq!(Weekday::Monday.days_until(Weekday::Friday), 4);
        assert_eq!(Weekday::Sunday.days_until(Weekday::Sunday), 0);
    }

    #[test]
    fn display_names() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn next_weekday() {
        // 2024-01-10 is a Wednesday.
        let wed = utc(2024, 1, 10);
        let fri = relative_weekday(&wed, Weekday::Friday, Direction::Next).unwrap();
        assert_eq!(fri.date().day(), 12);
        let mon = relative_weekday(&wed, Weekday::Monday, Direction::Next).unwrap();
        assert_eq!(mon.date().day(), 15);
        assert_eq!(mon.hour(), 10);
        assert_eq!(mon.minute(), 30);
    }

    #[test]
    fn next_same_weekday_moves_a_week() {
        let wed = utc(2024, 1, 10);
        let next = relative_weekday(&wed, Weekday::Wednesday, Direction::Next).unwrap();
        assert_eq!(next.date().day(), 17);
        let prev = relative_weekday(&wed, Weekday::Wednesday, Direction::Previous).unwrap();
        assert_eq!(prev.date().day(), 3);
    }

    #[test]
    fn previous_weekday_crosses_year() {
        // 2024-01-02 is a Tuesday; the previous Friday is 2023-12-29.
        let tue = utc(2024, 1, 2);
        let fri = relative_weekday(&tue, Weekday::Friday, Direction::Previous).unwrap();
        assert_eq!(
            (fri.year(), fri.month(), fri.day()),
            (2023, 12, 29)
        );
    }

    #[test]
    fn every_target_from_every_start() {
        let start = utc(2024, 3, 4); // Monday
        for offset in 0..7 {
            let from = shift_calendar_days(&start, offset).unwrap();
            for target in Weekday::ALL {
                let next = relative_weekday(&from, target, Direction::Next).unwrap();
                let prev = relative_weekday(&from, target, Direction::Previous).unwrap();
                assert_eq!(next.weekday(), target);
                assert_eq!(prev.weekday(), target);
                assert!(next > from);
                assert!(prev < from);
            }
        }
    }
}
