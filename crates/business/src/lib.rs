//! # almanac-business
//!
//! Weekend-aware business-day arithmetic. Saturday and Sunday are weekend
//! days; every other day is a business day. Holidays are not modelled.
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_business::{shift_business_days, difference_in_business_days};
//! use almanac_calendar::{Instant, TimeZone};
//!
//! let friday = Instant::from_ymd_hms(2024, 1, 5, 9, 0, 0, TimeZone::UTC)?;
//! let monday = shift_business_days(&friday, 1)?;
//! assert_eq!(difference_in_business_days(&monday, &friday), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekend` | Weekend predicates and weekend-start policy |
//! | `shift` | Moving by N business days |
//! | `difference` | Counting business days between instants |

mod difference;
mod shift;
mod weekend;

pub use almanac_calendar::CalendarError;
pub use difference::difference_in_business_days;
pub use shift::{shift_business_days, shift_business_days_with};
pub use weekend::{WeekendPolicy, is_business_day, is_weekend};
