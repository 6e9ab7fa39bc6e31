//! Greedy assignment engine.
//!
//! # Algorithm
//!
//! 1. Validate the roster (the catalog is validated on construction).
//! 2. For each lab in catalog order, take the groups of its policy
//!    (partitioned once per policy and cached for the run).
//! 3. For each group in label order, ask the strategy for a slot among the
//!    lab's candidates.
//! 4. Commit the chosen slot to the ledger and emit an assignment, or emit
//!    an unscheduled requirement. Neither is revisited.
//!
//! # Complexity
//! O(l * g * c) where l=labs, g=groups per lab, c=candidate slots per lab.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::ResourceCatalog;
use crate::error::ScheduleError;
use crate::ledger::SlotLedger;
use crate::models::{Assignment, Group, GroupPolicy, Roster, Schedule, UnscheduledRequirement};
use crate::partition::GroupPartitioner;

use super::strategy::{AssignmentStrategy, FirstFit};

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Students to schedule.
    pub roster: Roster,
    /// Labs, rooms and windows to schedule against.
    pub catalog: Arc<ResourceCatalog>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(roster: Roster, catalog: impl Into<Arc<ResourceCatalog>>) -> Self {
        Self {
            roster,
            catalog: catalog.into(),
        }
    }
}

/// Single-pass greedy scheduler.
///
/// Each run owns a fresh [`SlotLedger`]; the engine itself holds no
/// per-run state, so one engine can serve concurrent runs.
///
/// # Example
///
/// ```
/// use lab_rotation::catalog::ResourceCatalog;
/// use lab_rotation::models::Roster;
/// use lab_rotation::scheduler::AssignmentEngine;
///
/// let catalog = ResourceCatalog::reference();
/// let roster = Roster::anonymous(75);
///
/// let schedule = AssignmentEngine::new().run(&roster, &catalog).unwrap();
/// assert_eq!(schedule.assignment_count(), 67);
/// assert_eq!(schedule.requested_count(), 92);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    partitioner: GroupPartitioner,
    strategy: Arc<dyn AssignmentStrategy>,
}

impl AssignmentEngine {
    /// Creates an engine using [`FirstFit`] and the default partitioner.
    pub fn new() -> Self {
        Self {
            partitioner: GroupPartitioner::new(),
            strategy: Arc::new(FirstFit),
        }
    }

    /// Sets the slot selection strategy.
    pub fn with_strategy<S: AssignmentStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Sets the partitioner.
    pub fn with_partitioner(mut self, partitioner: GroupPartitioner) -> Self {
        self.partitioner = partitioner;
        self
    }

    /// Name of the strategy in use.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Schedules every lab of the catalog for the roster.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidRosterSize`] for an empty roster.
    /// - [`ScheduleError::SlotAlreadyTaken`] if the strategy picks an
    ///   occupied slot.
    ///
    /// No partial schedule is returned on error.
    pub fn run(
        &self,
        roster: &Roster,
        catalog: &ResourceCatalog,
    ) -> Result<Schedule, ScheduleError> {
        let span = tracing::info_span!(
            "schedule_run",
            students = roster.len(),
            labs = catalog.labs().len(),
            strategy = self.strategy.name()
        );
        let _enter = span.enter();

        if roster.is_empty() {
            return Err(ScheduleError::InvalidRosterSize);
        }
        if self.partitioner.is_small_cohort(roster.len()) {
            tracing::info!("Small cohort: one unified group attends every lab");
        }

        let mut ledger = SlotLedger::new();
        let mut schedule = Schedule::new();
        let mut groups_by_policy: HashMap<GroupPolicy, Vec<Group>> = HashMap::new();

        for lab in catalog.labs() {
            let groups = match groups_by_policy.entry(lab.policy) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => e.insert(self.partitioner.partition(roster, lab.policy)?),
            };
            let candidates = catalog.candidate_slots_for(lab);
            tracing::debug!(
                lab = %lab.name,
                policy = %lab.policy,
                groups = groups.len(),
                candidates = candidates.len(),
                "Scheduling lab"
            );

            for group in groups.iter() {
                match self
                    .strategy
                    .select(group, lab, &candidates, &ledger, catalog)
                {
                    Some(slot) => {
                        ledger.commit(group, slot)?;
                        tracing::debug!(
                            lab = %lab.name,
                            group = %group.label,
                            day = slot.day,
                            window = slot.window,
                            room = slot.room,
                            "Assigned"
                        );
                        schedule.add_assignment(Assignment::new(
                            group.label,
                            lab.id,
                            slot,
                            group.members.clone(),
                        ));
                    }
                    None => {
                        tracing::warn!(lab = %lab.name, group = %group.label, "No slot available");
                        schedule.add_unscheduled(UnscheduledRequirement {
                            group: group.label,
                            lab_id: lab.id,
                        });
                    }
                }
            }
        }

        tracing::info!(
            scheduled = schedule.assignment_count(),
            requested = schedule.requested_count(),
            "Schedule run finished"
        );
        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn run_request(&self, request: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        self.run(&request.roster, &request.catalog)
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
