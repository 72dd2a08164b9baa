//! # almanac-interval
//!
//! Lazy enumeration of period boundaries over a closed interval.
//!
//! ```text
//!  ┌──────────┐  start_of(period)  ┌──────────────┐  step by unit  ┌───────────┐
//!  │ Interval │───────────────────▶│ first / last │───────────────▶│ EachUnit  │
//!  └──────────┘                    └──────────────┘                └───────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use almanac_calendar::{Instant, Interval, TimeZone};
//! use almanac_interval::{IntervalUnit, each_unit_of_interval};
//!
//! let interval = Interval::new(start, end);
//! for month in each_unit_of_interval(&interval, IntervalUnit::Month)? {
//!     println!("{month}");
//! }
//! ```

mod days;
mod each;
mod unit;

pub use almanac_calendar::{CalendarError, Interval, WeekStart};
pub use days::{EachDayOfKind, each_business_day_of_interval, each_weekend_of_interval};
pub use each::{EachUnit, each_unit_of_interval};
pub use unit::IntervalUnit;
