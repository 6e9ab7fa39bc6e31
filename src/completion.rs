//! Session completion tracking.
//!
//! Marking a scheduled session as held draws the lab's devices from the
//! inventory, `quantity_per_student` times the group size for each device.
//! All requirements are checked before anything is drawn, so a failed
//! completion leaves both the tracker and the inventory unchanged.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::catalog::ResourceCatalog;
use crate::error::InventoryError;
use crate::inventory::DeviceInventory;
use crate::models::{Assignment, GroupLabel, LabId, Schedule};

/// Done flags per (lab, group).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletionTracker {
    completed: HashSet<(LabId, GroupLabel)>,
}

impl CompletionTracker {
    /// Creates a tracker with nothing completed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a session as held and draws its devices.
    ///
    /// # Errors
    /// - [`InventoryError::AlreadyCompleted`] for a repeated completion
    /// - [`InventoryError::UnknownLab`] if the lab is not in `catalog`
    /// - [`InventoryError::UnknownDevice`] / [`InventoryError::InsufficientStock`]
    ///   if any device falls short
    pub fn mark_completed(
        &mut self,
        assignment: &Assignment,
        catalog: &ResourceCatalog,
        inventory: &mut DeviceInventory,
    ) -> Result<(), InventoryError> {
        let key = (assignment.lab_id, assignment.group);
        if self.completed.contains(&key) {
            return Err(InventoryError::AlreadyCompleted {
                lab_id: assignment.lab_id,
                group: assignment.group,
            });
        }
        let lab = catalog
            .lab(assignment.lab_id)
            .ok_or(InventoryError::UnknownLab(assignment.lab_id))?;

        // A lab may list the same device twice.
        let mut needed: BTreeMap<&str, u32> = BTreeMap::new();
        for req in &lab.devices {
            let total = needed.entry(req.device.as_str()).or_insert(0);
            *total = total.saturating_add(req.total_for(assignment.group_size()));
        }

        for (&device, &quantity) in &needed {
            inventory.check(device, quantity)?;
        }
        for (&device, &quantity) in &needed {
            inventory.consume(device, quantity)?;
        }

        self.completed.insert(key);
        tracing::debug!(
            lab = %lab.name,
            group = %assignment.group,
            devices = needed.len(),
            "Session completed"
        );
        Ok(())
    }

    /// Whether the (lab, group) session was marked as held.
    pub fn is_completed(&self, lab_id: LabId, group: GroupLabel) -> bool {
        self.completed.contains(&(lab_id, group))
    }

    /// Number of completed sessions.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// (completed, scheduled) over the assignments of `schedule`.
    pub fn progress(&self, schedule: &Schedule) -> (usize, usize) {
        let done = schedule
            .assignments
            .iter()
            .filter(|a| self.is_completed(a.lab_id, a.group))
            .count();
        (done, schedule.assignment_count())
    }
}
