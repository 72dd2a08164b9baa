//! # almanac-distance
//!
//! English phrases for the distance between two instants.
//!
//! ## Modes
//!
//! ```text
//! approximate   45 min   -> "about 1 hour"
//!               14 days  -> "14 days"
//!               15 mon   -> "over 1 year"
//! strict        90 min   -> "1 hour"
//!               20 days  -> "2 weeks"
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_distance::{DistanceOptions, format_distance, format_distance_strict};
//!
//! let options = DistanceOptions::new().with_add_suffix(true);
//! let phrase = format_distance(&meeting, &now, &options);       // "in about 2 hours"
//! let strict = format_distance_strict(&deadline, &now, &options); // "3 days ago"
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `options` | `DistanceOptions` builder |
//! | `approximate` | Rounded buckets with "about", "over" and "almost" qualifiers |
//! | `strict` | Single floored unit |
//! | `format` | Suffix handling and "to now" helpers |

mod approximate;
mod format;
mod options;
mod strict;

pub use approximate::{ApproxDistance, approximate_distance};
pub use format::{
    format_distance, format_distance_strict, format_distance_to_now, format_distance_to_now_strict,
};
pub use options::DistanceOptions;
pub use strict::{StrictDistance, strict_distance};
