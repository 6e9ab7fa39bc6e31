//! Daily time window model.
//!
//! # Time Model
//! Windows are expressed in minutes since midnight and are reused on every
//! scheduling day. A concrete period is a (day index, window index) pair;
//! the catalog owns the ordered window list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A daily time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minutes since midnight, inclusive).
    pub start_min: u32,
    /// Interval end (minutes since midnight, exclusive).
    pub end_min: u32,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Creates a window from wall-clock hours and minutes.
    pub fn hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Self {
        Self::new(start_h * 60 + start_m, end_h * 60 + end_m)
    }

    /// Length of this window in minutes (0 for inverted windows).
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether the window has a positive length.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end_min > self.start_min
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_min / 60,
            self.start_min % 60,
            self.end_min / 60,
            self.end_min % 60
        )
    }
}
