//! # almanac-calendar
//!
//! Gregorian calendar arithmetic over time-zone-aware instants.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate + TimeOfDay"] -->|"Instant::new(tz)"| B["Instant"]
//!     B -->|"shift(unit, n)"| B
//!     B -->|"set_field(field, v)"| B
//!     B -->|"start_of / end_of(period)"| B
//!     B -->|"iso_week_date()"| C["IsoWeekDate"]
//!     C -->|"to_date()"| A
//!     B -->|"difference_in(unit)"| D["i64"]
//!     B -->|"Interval::new"| E["Interval"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{Instant, TimeZone, Unit, shift, iso_week, start_of, Period};
//!
//! // Month shifts clamp to the end of the target month
//! let jan31 = Instant::from_ymd_hms(2024, 1, 31, 9, 0, 0, TimeZone::UTC)?;
//! let feb29 = shift(&jan31, Unit::Month, 1)?;
//! assert_eq!(feb29.day(), 29);
//!
//! // ISO week dates can belong to the neighbouring year
//! let new_year = Instant::from_ymd_hms(2005, 1, 1, 0, 0, 0, TimeZone::UTC)?;
//! assert_eq!(iso_week(&new_year), (2004, 53));
//!
//! // Period boundaries
//! let quarter = start_of(&feb29, Period::Quarter)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `civil` | Leap-year rule, civil dates and day numbers, times of day |
//! | `instant` | Zone-aware instant with civil getters |
//! | `weekday` | Weekday enum and next/previous weekday lookup |
//! | `unit` | Shift and difference units |
//! | `shift` | Adding civil units with end-of-month clamping |
//! | `set` | Replacing a single civil field |
//! | `boundary` | Start, end and last day of periods, minute rounding |
//! | `difference` | Whole-unit and calendar differences |
//! | `compare` | Same-period tests, ordering, closest instant |
//! | `interval` | Closed instant ranges |
//! | `iso_week` | ISO 8601 week dates |
//! | `error` | Error types |

mod boundary;
mod civil;
mod compare;
mod difference;
mod error;
mod instant;
mod interval;
mod iso_week;
mod set;
mod shift;
mod unit;
mod weekday;

pub use boundary::{Period, WeekStart, end_of, last_day_of, round_to_nearest_minutes, start_of};
pub use civil::{
    CivilDate, MAX_YEAR, MIN_YEAR, TimeOfDay, days_in_month, days_in_year, is_leap_year,
};
pub use compare::{
    closest_to, compare_asc, compare_desc, earliest, is_same, is_this, is_today, is_tomorrow,
    is_within_interval, is_yesterday, latest,
};
pub use difference::{calendar_difference_in, difference_in};
pub use error::CalendarError;
pub use instant::Instant;
pub use interval::Interval;
pub use iso_week::{
    IsoWeekDate, difference_in_calendar_iso_week_years, difference_in_calendar_iso_weeks,
    end_of_iso_week, end_of_iso_week_year, from_iso_week_date, is_same_iso_week,
    is_same_iso_week_year, iso_week, iso_week_date, iso_weeks_in_year, last_day_of_iso_week,
    last_day_of_iso_week_year, start_of_iso_week, start_of_iso_week_year,
};
pub use set::{Field, set_field};
pub use shift::{add_months, add_years, shift, shift_calendar_days};
pub use unit::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK, Unit};
pub use weekday::{Direction, Weekday, relative_weekday};

pub use jiff::tz::TimeZone;
pub use jiff::{SignedDuration, Timestamp, Zoned};
