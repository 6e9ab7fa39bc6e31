//! Lab rotation domain models.
//!
//! Provides the core data types for describing a rotation (students,
//! groups, rooms, labs, daily windows) and its outcome (slots,
//! assignments, unscheduled requirements).
//!
//! # Domain Mappings
//!
//! | lab-rotation | Generic scheduling |
//! |--------------|--------------------|
//! | Lab | Job |
//! | Group | Job instance / lot |
//! | Room | Machine |
//! | Slot | Machine × period |
//! | Schedule | Solution |

mod calendar;
mod group;
mod lab;
mod room;
mod schedule;
mod student;

pub use calendar::TimeWindow;
pub use group::{Group, GroupLabel, GroupPolicy};
pub use lab::{DeviceRequirement, Lab, LabId};
pub use room::{CapacityClass, Room, DEFAULT_SEATS};
pub use schedule::{Assignment, Conflict, ConflictKind, Schedule, Slot, UnscheduledRequirement};
pub use student::{Roster, Student, StudentId};
