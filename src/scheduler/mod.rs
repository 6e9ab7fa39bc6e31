//! Greedy assignment and schedule reporting.
//!
//! # Algorithm
//!
//! `AssignmentEngine` walks labs in catalog order and groups in label order,
//! giving each (group, lab) pair the slot its [`AssignmentStrategy`] picks.
//! The default [`FirstFit`] strategy takes the first free slot in day,
//! window, room order. It is not optimal: early labs crowd out later ones.
//!
//! # Report
//!
//! `ScheduleReport` projects a schedule by room, lab, day and student, and
//! computes completion statistics.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

mod engine;
mod report;
mod strategy;

pub use engine::{AssignmentEngine, ScheduleRequest};
pub use report::{
    CompletionStats, DayEntry, DeviceHint, LabEntry, LabView, RoomEntry, RoomView, Satisfaction,
    ScheduleReport,
};
pub use strategy::{AssignmentStrategy, FirstFit};
