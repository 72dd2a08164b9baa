//! ISO 8601 week dates.
//!
//! An ISO week runs Monday to Sunday and belongs to the week-numbering year
//! that contains its Thursday. Week 1 is therefore the week containing
//! January 4, and a week-numbering year has 52 or 53 weeks. The first days
//! of January can belong to the last week of the previous year, and the last
//! days of December to week 1 of the next.

use std::fmt;

use jiff::tz::TimeZone;

use crate::boundary::{Period, WeekStart, end_of, last_day_of, period_index, start_of};
use crate::civil::{CivilDate, TimeOfDay, civil_from_days, days_from_civil};
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::weekday::Weekday;

const ISO_WEEK: Period = Period::Week(WeekStart::Monday);

/// An (ISO week-numbering year, week, weekday) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeekDate {
    year: i32,
    week: u8,
    weekday: Weekday,
}

impl IsoWeekDate {
    /// Creates a week date, checking that `week` exists in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidIsoWeek`] if `week` is 0 or beyond the
    /// last week of the year.
    pub fn new(year: i32, week: u8, weekday: Weekday) -> Result<Self, CalendarError> {
        let max_week = iso_weeks_in_year(year);
        if !(1..=max_week).contains(&week) {
            return Err(CalendarError::InvalidIsoWeek {
                year,
                week,
                max_week,
            });
        }
        Ok(Self {
            year,
            week,
            weekday,
        })
    }

    /// Derives the week date of a civil date.
    pub fn from_date(date: CivilDate) -> Self {
        from_days(date.to_days())
    }

    /// The ISO week-numbering year, which can differ from the calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Week number (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }

    /// Day within the week, Monday first.
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the civil date this week date names.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] outside the supported years.
    pub fn to_date(self) -> Result<CivilDate, CalendarError> {
        let days = first_monday(i64::from(self.year))
            + (i64::from(self.week) - 1) * 7
            + i64::from(self.weekday.iso_number())
            - 1;
        CivilDate::from_days(days)
    }
}

impl fmt::Display for IsoWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-W{:02}-{}",
            self.year,
            self.week,
            self.weekday.iso_number()
        )
    }
}

/// Day number of the Monday that opens ISO year `year`.
fn first_monday(year: i64) -> i64 {
    let jan4 = days_from_civil(year, 1, 4);
    jan4 - i64::from(Weekday::from_days_since_epoch(jan4).iso_number()) + 1
}

fn from_days(days: i64) -> IsoWeekDate {
    let weekday = Weekday::from_days_since_epoch(days);
    let thursday = days + 4 - i64::from(weekday.iso_number());
    let (year, _, _) = civil_from_days(thursday);
    let jan1 = days_from_civil(year, 1, 1);
    IsoWeekDate {
        year: year as i32,
        week: ((thursday - jan1) / 7 + 1) as u8,
        weekday,
    }
}

/// Number of ISO weeks in week-numbering year `year` (52 or 53).
///
/// This is the week number of the last day of that year.
pub fn iso_weeks_in_year(year: i32) -> u8 {
    let last = first_monday(i64::from(year) + 1) - 1;
    from_days(last).week
}

/// Returns the ISO week date of `instant` in its own zone.
pub fn iso_week_date(instant: &Instant) -> IsoWeekDate {
    IsoWeekDate::from_date(instant.date())
}

/// Returns `(iso_year, week)` for `instant`.
pub fn iso_week(instant: &Instant) -> (i32, u8) {
    let date = iso_week_date(instant);
    (date.year(), date.week())
}

/// Creates the instant at midnight of an ISO week date in `tz`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date lies outside the supported range.
pub fn from_iso_week_date(week_date: IsoWeekDate, tz: TimeZone) -> Result<Instant, CalendarError> {
    Instant::at_midnight(week_date.to_date()?, tz)
}

/// Monday 00:00 of the ISO week containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn start_of_iso_week(instant: &Instant) -> Result<Instant, CalendarError> {
    start_of(instant, ISO_WEEK)
}

/// Last nanosecond of the Sunday closing the ISO week containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn end_of_iso_week(instant: &Instant) -> Result<Instant, CalendarError> {
    end_of(instant, ISO_WEEK)
}

/// Sunday 00:00 closing the ISO week containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the day lies outside the supported range.
pub fn last_day_of_iso_week(instant: &Instant) -> Result<Instant, CalendarError> {
    last_day_of(instant, ISO_WEEK)
}

/// First and last civil day of the ISO year containing `instant`.
fn iso_year_days(instant: &Instant) -> Result<(CivilDate, CivilDate), CalendarError> {
    let year = i64::from(iso_week_date(instant).year());
    let first = CivilDate::from_days(first_monday(year))?;
    let last = CivilDate::from_days(first_monday(year + 1) - 1)?;
    Ok((first, last))
}

/// Monday 00:00 of week 1 of the ISO year containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn start_of_iso_week_year(instant: &Instant) -> Result<Instant, CalendarError> {
    let (first, _) = iso_year_days(instant)?;
    Instant::new(first, TimeOfDay::MIDNIGHT, instant.time_zone().clone())
}

/// Last nanosecond of the ISO year containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the boundary lies outside the supported range.
pub fn end_of_iso_week_year(instant: &Instant) -> Result<Instant, CalendarError> {
    let (_, last) = iso_year_days(instant)?;
    Instant::new(last, TimeOfDay::LAST_NANOSECOND, instant.time_zone().clone())
}

/// Midnight of the last day (a Sunday) of the ISO year containing `instant`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the day lies outside the supported range.
pub fn last_day_of_iso_week_year(instant: &Instant) -> Result<Instant, CalendarError> {
    let (_, last) = iso_year_days(instant)?;
    Instant::new(last, TimeOfDay::MIDNIGHT, instant.time_zone().clone())
}

/// Number of ISO week boundaries between `earlier` and `later`, read in
/// `later`'s zone.
pub fn difference_in_calendar_iso_weeks(later: &Instant, earlier: &Instant) -> i64 {
    let earlier = earlier.in_time_zone(later.time_zone());
    period_index(later.date(), later.time(), ISO_WEEK)
        - period_index(earlier.date(), earlier.time(), ISO_WEEK)
}

/// Difference of ISO week-numbering years, read in `later`'s zone.
pub fn difference_in_calendar_iso_week_years(later: &Instant, earlier: &Instant) -> i64 {
    let earlier = earlier.in_time_zone(later.time_zone());
    i64::from(iso_week_date(later).year()) - i64::from(iso_week_date(&earlier).year())
}

/// Returns `true` if both instants fall in the same ISO week in `tz`.
pub fn is_same_iso_week(a: &Instant, b: &Instant, tz: &TimeZone) -> bool {
    iso_week(&a.in_time_zone(tz)) == iso_week(&b.in_time_zone(tz))
}

/// Returns `true` if both instants fall in the same ISO year in `tz`.
pub fn is_same_iso_week_year(a: &Instant, b: &Instant, tz: &TimeZone) -> bool {
    iso_week(&a.in_time_zone(tz)).0 == iso_week(&b.in_time_zone(tz)).0
}
