//! Time-zone-aware instants with civil field access.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, Zoned, civil};

use crate::civil::{CivilDate, TimeOfDay, days_in_year, is_leap_year};
use crate::error::CalendarError;
use crate::weekday::Weekday;

/// An immutable point in time together with the zone used to read its
/// civil fields.
///
/// Equality, ordering and hashing only look at the absolute moment: the
/// same moment viewed from two zones compares equal.
#[derive(Debug, Clone)]
pub struct Instant {
    zoned: Zoned,
}

impl Instant {
    /// Creates an instant from civil components interpreted in `tz`.
    ///
    /// Wall-clock times that fall in a DST gap resolve to the later offset;
    /// ambiguous times resolve to the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Civil`] if the clock rejects the result.
    pub fn new(date: CivilDate, time: TimeOfDay, tz: TimeZone) -> Result<Self, CalendarError> {
        let dt = civil::DateTime::new(
            date.year() as i16,
            date.month() as i8,
            date.day() as i8,
            time.hour() as i8,
            time.minute() as i8,
            time.second() as i8,
            time.nanosecond() as i32,
        )?;
        Ok(Self {
            zoned: dt.to_zoned(tz)?,
        })
    }

    /// Creates an instant from year, month, day, hour, minute and second.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any component is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tz: TimeZone,
    ) -> Result<Self, CalendarError> {
        let date = CivilDate::new(year, month, day)?;
        let time = TimeOfDay::new(hour, minute, second, 0)?;
        Self::new(date, time, tz)
    }

    /// Creates the instant at local midnight of `date` in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Civil`] if the clock rejects the result.
    pub fn at_midnight(date: CivilDate, tz: TimeZone) -> Result<Self, CalendarError> {
        Self::new(date, TimeOfDay::MIDNIGHT, tz)
    }

    /// Views an absolute timestamp in `tz`.
    pub fn from_timestamp(timestamp: Timestamp, tz: TimeZone) -> Self {
        Self {
            zoned: timestamp.to_zoned(tz),
        }
    }

    /// Wraps a zoned datetime.
    pub fn from_zoned(zoned: Zoned) -> Self {
        Self { zoned }
    }

    /// Reads the system clock once and views it in `tz`.
    pub fn now(tz: TimeZone) -> Self {
        Self::from_timestamp(Timestamp::now(), tz)
    }

    /// Returns the absolute moment.
    pub fn timestamp(&self) -> Timestamp {
        self.zoned.timestamp()
    }

    /// Returns the zone used to read civil fields.
    pub fn time_zone(&self) -> &TimeZone {
        self.zoned.time_zone()
    }

    /// Returns the underlying zoned datetime.
    pub fn as_zoned(&self) -> &Zoned {
        &self.zoned
    }

    /// Returns the same moment read in another zone.
    pub fn in_time_zone(&self, tz: &TimeZone) -> Self {
        Self {
            zoned: self.zoned.with_time_zone(tz.clone()),
        }
    }

    /// Returns the UTC offset in effect at this instant, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.zoned.offset().seconds()
    }

    /// Returns the civil date.
    pub fn date(&self) -> CivilDate {
        CivilDate::from_valid(
            i32::from(self.zoned.year()),
            self.zoned.month() as u8,
            self.zoned.day() as u8,
        )
    }

    /// Returns the wall-clock time of day.
    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::from_valid(
            self.zoned.hour() as u8,
            self.zoned.minute() as u8,
            self.zoned.second() as u8,
            self.zoned.subsec_nanosecond() as u32,
        )
    }

    /// Returns the year in the instant's zone.
    pub fn year(&self) -> i32 {
        i32::from(self.zoned.year())
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.zoned.month() as u8
    }

    /// Returns the day of the month (1..=31).
    pub fn day(&self) -> u8 {
        self.zoned.day() as u8
    }

    /// Returns the wall-clock hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.zoned.hour() as u8
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.zoned.minute() as u8
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u8 {
        self.zoned.second() as u8
    }

    /// Returns the sub-second fraction in nanoseconds.
    pub fn nanosecond(&self) -> u32 {
        self.zoned.subsec_nanosecond() as u32
    }

    /// Returns the sub-second fraction truncated to milliseconds (0..=999).
    pub fn millisecond(&self) -> u16 {
        (self.nanosecond() / 1_000_000) as u16
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.date().weekday()
    }

    /// Returns the ordinal day of the year (1..=366).
    pub fn day_of_year(&self) -> u16 {
        self.date().day_of_year()
    }

    /// Returns the quarter of the year (1..=4).
    pub fn quarter(&self) -> u8 {
        self.date().quarter()
    }

    /// Returns the Monday-based week of the month (1..=6).
    ///
    /// Week 1 runs from the first of the month to the first Sunday; each
    /// later week starts on a Monday.
    pub fn week_of_month(&self) -> u8 {
        let date = self.date();
        let first = CivilDate::from_valid(date.year(), date.month(), 1);
        let lead = first.weekday().iso_number() - 1;
        (date.day() - 1 + lead) / 7 + 1
    }

    /// Returns the length of the instant's month.
    pub fn days_in_month(&self) -> u8 {
        self.date().days_in_month()
    }

    /// Returns 366 in leap years, 365 otherwise.
    pub fn days_in_year(&self) -> u16 {
        days_in_year(self.year())
    }

    /// Returns `true` if the instant's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns `true` on the 1st.
    pub fn is_first_day_of_month(&self) -> bool {
        self.day() == 1
    }

    /// Returns `true` on the last day of the month.
    pub fn is_last_day_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns `true` on January 1.
    pub fn is_first_day_of_year(&self) -> bool {
        self.month() == 1 && self.day() == 1
    }

    /// Returns `true` on December 31.
    pub fn is_last_day_of_year(&self) -> bool {
        self.month() == 12 && self.day() == 31
    }

    /// Adds an absolute duration, keeping the zone.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Civil`] if the result leaves the clock's range.
    pub fn checked_add(&self, duration: SignedDuration) -> Result<Self, CalendarError> {
        let timestamp = self.timestamp().checked_add(duration)?;
        Ok(Self::from_timestamp(timestamp, self.time_zone().clone()))
    }

    /// Returns the signed duration `self - earlier`.
    pub fn duration_since(&self, earlier: &Instant) -> SignedDuration {
        self.timestamp().duration_since(earlier.timestamp())
    }

    /// Rebuilds the instant from new civil fields in the same zone.
    ///
    /// When the new wall-clock time occurs twice, the current UTC offset is
    /// kept if it is one of the candidates.
    pub(crate) fn with_civil(
        &self,
        date: CivilDate,
        time: TimeOfDay,
    ) -> Result<Self, CalendarError> {
        let date = civil::Date::new(date.year() as i16, date.month() as i8, date.day() as i8)?;
        let time = civil::Time::new(
            time.hour() as i8,
            time.minute() as i8,
            time.second() as i8,
            time.nanosecond() as i32,
        )?;
        Ok(Self {
            zoned: self.zoned.with().date(date).time(time).build()?,
        })
    }

    /// Replaces the civil date, keeping the time of day and zone.
    pub(crate) fn with_date(&self, date: CivilDate) -> Result<Self, CalendarError> {
        self.with_civil(date, self.time())
    }

    /// Replaces the time of day, keeping the date and zone.
    pub(crate) fn with_time(&self, time: TimeOfDay) -> Result<Self, CalendarError> {
        self.with_civil(self.date(), time)
    }
}

impl From<Zoned> for Instant {
    fn from(zoned: Zoned) -> Self {
        Self::from_zoned(zoned)
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp() == other.timestamp()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp().cmp(&other.timestamp())
    }
}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp().hash(state);
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.zoned, f)
    }
}
