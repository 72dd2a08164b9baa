//! Formatting options for distance phrases.

use serde::Deserialize;

/// Options shared by the approximate and strict formatters.
///
/// # Example
///
/// ```
/// use almanac_distance::DistanceOptions;
///
/// let options = DistanceOptions::new()
///     .with_include_seconds(true)
///     .with_add_suffix(true);
///
/// assert!(options.include_seconds());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistanceOptions {
    /// Use second-level phrases below two minutes.
    include_seconds: bool,
    /// Wrap the phrase as "in X" or "X ago".
    add_suffix: bool,
}

impl DistanceOptions {
    /// Creates options with both flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables second-level phrases ("half a minute") for short distances.
    pub fn with_include_seconds(mut self, include_seconds: bool) -> Self {
        self.include_seconds = include_seconds;
        self
    }

    /// Enables the "in " prefix or " ago" suffix.
    pub fn with_add_suffix(mut self, add_suffix: bool) -> Self {
        self.add_suffix = add_suffix;
        self
    }

    /// Returns `true` if second-level phrases are enabled.
    pub fn include_seconds(&self) -> bool {
        self.include_seconds
    }

    /// Returns `true` if phrases get the "in"/"ago" wrapper.
    pub fn add_suffix(&self) -> bool {
        self.add_suffix
    }
}
