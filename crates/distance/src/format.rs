//! Phrase rendering with the optional "in"/"ago" wrapper.

use std::fmt::Display;

use almanac_calendar::Instant;
use tracing::trace;

use crate::approximate::approximate_distance;
use crate::options::DistanceOptions;
use crate::strict::strict_distance;

fn with_suffix(
    phrase: impl Display,
    a: &Instant,
    b: &Instant,
    options: &DistanceOptions,
) -> String {
    if !options.add_suffix() {
        return phrase.to_string();
    }
    if a > b {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Describes the distance from `b` to `a` in approximate words.
///
/// With `add_suffix` the phrase reads "in X" when `a` is later than `b`
/// and "X ago" otherwise.
///
/// # Example
///
/// ```ignore
/// let phrase = format_distance(&later, &earlier, &DistanceOptions::new().with_add_suffix(true));
/// assert_eq!(phrase, "in about 1 hour");
/// ```
pub fn format_distance(a: &Instant, b: &Instant, options: &DistanceOptions) -> String {
    let distance = approximate_distance(a, b, options);
    trace!(?distance, "approximate distance");
    with_suffix(distance, a, b, options)
}

/// Describes the distance from `b` to `a` as a single floored unit.
///
/// `include_seconds` has no effect here.
pub fn format_distance_strict(a: &Instant, b: &Instant, options: &DistanceOptions) -> String {
    let distance = strict_distance(a, b);
    trace!(?distance, "strict distance");
    with_suffix(distance, a, b, options)
}

/// [`format_distance`] against the current time in `instant`'s zone.
pub fn format_distance_to_now(instant: &Instant, options: &DistanceOptions) -> String {
    let now = Instant::now(instant.time_zone().clone());
    format_distance(instant, &now, options)
}

/// [`format_distance_strict`] against the current time in `instant`'s zone.
pub fn format_distance_to_now_strict(instant: &Instant, options: &DistanceOptions) -> String {
    let now = Instant::now(instant.time_zone().clone());
    format_distance_strict(instant, &now, options)
}
