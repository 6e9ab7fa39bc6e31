//! Room model.
//!
//! Rooms are the bookable spaces. Each room has a capacity class deciding
//! which group policies may use it, and a seat count that must cover the
//! size of any group placed in it.

use serde::{Deserialize, Serialize};

use super::GroupPolicy;

/// Default seat count, matching the reference deployment.
pub const DEFAULT_SEATS: usize = 15;

/// Room capacity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CapacityClass {
    /// Usable by standard and reduced labs.
    #[default]
    Standard,
    /// Usable by reduced labs only.
    Reduced,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (also its display name).
    pub id: String,
    /// Capacity classification.
    #[serde(default)]
    pub capacity_class: CapacityClass,
    /// Number of seats.
    #[serde(default = "default_seats")]
    pub seats: usize,
}

fn default_seats() -> usize {
    DEFAULT_SEATS
}

impl Room {
    /// Creates a standard-class room with the default seat count.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capacity_class: CapacityClass::Standard,
            seats: DEFAULT_SEATS,
        }
    }

    /// Creates a reduced-class room with the default seat count.
    pub fn reduced(id: impl Into<String>) -> Self {
        Self::new(id).with_class(CapacityClass::Reduced)
    }

    /// Sets the capacity class.
    pub fn with_class(mut self, class: CapacityClass) -> Self {
        self.capacity_class = class;
        self
    }

    /// Sets the seat count.
    pub fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    /// Whether labs of the given policy may be held here.
    pub fn serves(&self, policy: GroupPolicy) -> bool {
        match policy {
            GroupPolicy::Standard => self.capacity_class == CapacityClass::Standard,
            GroupPolicy::Reduced => true,
        }
    }

    /// Whether a group of `size` students fits.
    #[inline]
    pub fn fits(&self, size: usize) -> bool {
        size <= self.seats
    }
}
