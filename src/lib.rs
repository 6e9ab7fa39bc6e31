//! Lab rotation timetabling.
//!
//! Partitions a student cohort into rotation groups and assigns every
//! (group, lab) pair to a (day, window, room) slot with a greedy
//! first-fit engine, reporting whatever cannot be placed.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Roster`, `Group`, `Lab`, `Room`,
//!   `TimeWindow`, `Slot`, `Assignment`, `Schedule`
//! - **`partition`**: Cohort → standard (5) or reduced (8) groups
//! - **`catalog`**: Validated labs, rooms, windows and days; JSON loading
//! - **`ledger`**: Room and group occupancy for one run
//! - **`scheduler`**: `AssignmentEngine`, pluggable strategies, `ScheduleReport`
//! - **`board`**: Atomic publication of the latest schedule
//! - **`inventory`** / **`completion`**: Device stock drawn by held sessions
//! - **`validation`**: Catalog integrity checks
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use lab_rotation::{AssignmentEngine, ResourceCatalog, Roster, ScheduleReport};
//!
//! let catalog = ResourceCatalog::reference();
//! let roster = Roster::anonymous(75);
//! let schedule = AssignmentEngine::new().run(&roster, &catalog).unwrap();
//!
//! let stats = ScheduleReport::new(&catalog, &schedule).completion();
//! assert_eq!((stats.scheduled, stats.total_requested), (67, 92));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod board;
pub mod catalog;
pub mod completion;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod partition;
pub mod scheduler;
pub mod validation;

pub use board::{PublishedSchedule, ScheduleBoard};
pub use catalog::{CatalogConfig, ResourceCatalog};
pub use completion::CompletionTracker;
pub use error::{InventoryError, ScheduleError};
pub use inventory::DeviceInventory;
pub use ledger::SlotLedger;
pub use models::{Assignment, Group, GroupLabel, GroupPolicy, Lab, Roster, Room, Schedule, Slot};
pub use partition::GroupPartitioner;
pub use scheduler::{AssignmentEngine, CompletionStats, FirstFit, ScheduleReport};
