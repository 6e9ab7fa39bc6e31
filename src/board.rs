//! Published-schedule board.
//!
//! Readers take an `Arc` snapshot of the latest published schedule;
//! regeneration builds a complete schedule off to the side and swaps it in
//! under a short write lock. Readers never see a half-built schedule, and a
//! failed regeneration leaves the previous publication in place.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::catalog::ResourceCatalog;
use crate::error::ScheduleError;
use crate::models::{Roster, Schedule};
use crate::scheduler::{AssignmentEngine, CompletionStats};

/// A schedule as published on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedSchedule {
    /// Monotonic publication number, starting at 1.
    pub revision: u64,
    /// The accepted schedule.
    pub schedule: Schedule,
    /// Completion statistics of `schedule`.
    pub stats: CompletionStats,
}

/// Holds the current schedule for concurrent readers.
#[derive(Debug, Default)]
pub struct ScheduleBoard {
    current: RwLock<Option<Arc<PublishedSchedule>>>,
    revision: AtomicU64,
}

impl ScheduleBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current schedule and returns the new publication.
    pub fn publish(&self, schedule: Schedule) -> Arc<PublishedSchedule> {
        let stats = CompletionStats::from_schedule(&schedule);
        let mut guard = self.current.write();
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        let published = Arc::new(PublishedSchedule {
            revision,
            schedule,
            stats,
        });
        *guard = Some(Arc::clone(&published));
        drop(guard);

        tracing::info!(
            revision,
            scheduled = stats.scheduled,
            total = stats.total_requested,
            "Published schedule"
        );
        published
    }

    /// Snapshot of the current publication, if any.
    #[inline]
    pub fn current(&self) -> Option<Arc<PublishedSchedule>> {
        self.current.read().clone()
    }

    /// Revision of the latest publication (0 before the first).
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Withdraws the current publication. The revision counter keeps going.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// Runs the engine and publishes the result.
    ///
    /// # Errors
    /// Propagates the engine error; nothing is published in that case.
    pub fn regenerate(
        &self,
        engine: &AssignmentEngine,
        roster: &Roster,
        catalog: &ResourceCatalog,
    ) -> Result<Arc<PublishedSchedule>, ScheduleError> {
        match engine.run(roster, catalog) {
            Ok(schedule) => Ok(self.publish(schedule)),
            Err(e) => {
                tracing::warn!(error = %e, "Regeneration failed; keeping current schedule");
                Err(e)
            }
        }
    }
}
