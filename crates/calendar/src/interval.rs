//! Closed intervals between two instants.

use crate::instant::Instant;

/// A closed range `[start, end]` of instants.
///
/// An interval whose start lies after its end is empty. Construction never
/// fails and never swaps the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Instant,
    end: Instant,
}

impl Interval {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Instant {
        &self.start
    }

    pub fn end(&self) -> &Instant {
        &self.end
    }

    /// Returns `true` if the start lies after the end.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns `true` if `instant` lies within the bounds, inclusive.
    pub fn contains(&self, instant: &Instant) -> bool {
        &self.start <= instant && instant <= &self.end
    }
}
