//! Slot occupancy ledger.
//!
//! Tracks three occupancy sets for one scheduling run:
//!
//! - room occupancy keyed by (day, window, room)
//! - group occupancy keyed by (group, day, window)
//! - student occupancy keyed by (student, day, window)
//!
//! Standard and reduced groups share students, so group occupancy alone
//! cannot stop a student from being in two rooms at once. A slot is free
//! for a group only if its room, its label and every member are unmarked.
//! Marks are never removed during a run; a new run starts from an empty
//! ledger.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::{Group, GroupLabel, Slot, StudentId};

/// Occupancy state of one run.
#[derive(Debug, Clone, Default)]
pub struct SlotLedger {
    room_busy: HashSet<Slot>,
    group_busy: HashSet<(GroupLabel, u32, usize)>,
    student_busy: HashSet<(StudentId, u32, usize)>,
}

impl SlotLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the room is free and neither the group nor any of its
    /// members has something else at that (day, window).
    pub fn is_free(&self, group: &Group, slot: Slot) -> bool {
        !self.room_busy.contains(&slot)
            && !self.is_group_busy(group.label, slot.day, slot.window)
            && !group
                .members
                .iter()
                .any(|&s| self.is_student_busy(s, slot.day, slot.window))
    }

    /// Whether the room is booked at the slot, by any group.
    #[inline]
    pub fn is_room_busy(&self, slot: Slot) -> bool {
        self.room_busy.contains(&slot)
    }

    /// Whether the group is booked anywhere at (day, window).
    #[inline]
    pub fn is_group_busy(&self, group: GroupLabel, day: u32, window: usize) -> bool {
        self.group_busy.contains(&(group, day, window))
    }

    /// Whether the student attends any session at (day, window).
    #[inline]
    pub fn is_student_busy(&self, student: StudentId, day: u32, window: usize) -> bool {
        self.student_busy.contains(&(student, day, window))
    }

    /// Marks the slot's room, the group's (day, window) and each member's
    /// (day, window) as taken.
    ///
    /// # Errors
    /// [`ScheduleError::SlotAlreadyTaken`] if any key was already marked;
    /// the ledger is left unchanged.
    pub fn commit(&mut self, group: &Group, slot: Slot) -> Result<(), ScheduleError> {
        if !self.is_free(group, slot) {
            return Err(ScheduleError::SlotAlreadyTaken {
                group: group.label,
                slot,
            });
        }
        self.room_busy.insert(slot);
        self.group_busy.insert((group.label, slot.day, slot.window));
        self.student_busy.extend(
            group
                .members
                .iter()
                .map(|&s| (s, slot.day, slot.window)),
        );
        Ok(())
    }

    /// Number of committed slots.
    pub fn committed_count(&self) -> usize {
        self.room_busy.len()
    }

    /// Clears all marks.
    pub fn reset(&mut self) {
        self.room_busy.clear();
        self.group_busy.clear();
        self.student_busy.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Group {
        Group::new(GroupLabel::Standard(0), vec![1, 2, 3])
    }

    fn b() -> Group {
        Group::new(GroupLabel::Standard(1), vec![4, 5, 6])
    }

    #[test]
    fn test_commit_marks_all_keys() {
        let mut ledger = SlotLedger::new();
        let slot = Slot::new(0, 1, 2);
        assert!(ledger.is_free(&a(), slot));

        ledger.commit(&a(), slot).unwrap();
        assert!(!ledger.is_free(&a(), slot));
        assert!(ledger.is_room_busy(slot));
        assert!(ledger.is_group_busy(GroupLabel::Standard(0), 0, 1));
        assert!(ledger.is_student_busy(2, 0, 1));
        assert!(!ledger.is_student_busy(4, 0, 1));
        assert_eq!(ledger.committed_count(), 1);
    }

    #[test]
    fn test_room_conflict() {
        let mut ledger = SlotLedger::new();
        let slot = Slot::new(0, 0, 0);
        ledger.commit(&a(), slot).unwrap();

        // another group, same room slot
        assert!(!ledger.is_free(&b(), slot));
        let err = ledger.commit(&b(), slot).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::SlotAlreadyTaken { group: GroupLabel::Standard(1), .. }
        ));
        assert!(!ledger.is_group_busy(GroupLabel::Standard(1), 0, 0));
        assert!(!ledger.is_student_busy(4, 0, 0));
    }

    #[test]
    fn test_group_conflict() {
        let mut ledger = SlotLedger::new();
        ledger.commit(&a(), Slot::new(0, 0, 0)).unwrap();

        // same group, other room, same (day, window)
        assert!(!ledger.is_free(&a(), Slot::new(0, 0, 1)));
        assert!(ledger.commit(&a(), Slot::new(0, 0, 1)).is_err());
        assert!(!ledger.is_room_busy(Slot::new(0, 0, 1)));

        // same group, next window is fine
        assert!(ledger.is_free(&a(), Slot::new(0, 1, 1)));
        // same window on another day is fine
        assert!(ledger.is_free(&a(), Slot::new(1, 0, 0)));
    }

    #[test]
    fn test_shared_student_conflict() {
        let mut ledger = SlotLedger::new();
        ledger.commit(&a(), Slot::new(0, 0, 0)).unwrap();

        // a reduced group sharing student 3 with group A
        let overlap = Group::new(GroupLabel::Reduced(1), vec![3, 7]);
        assert!(!ledger.is_group_busy(overlap.label, 0, 0));
        assert!(!ledger.is_free(&overlap, Slot::new(0, 0, 1)));
        let err = ledger.commit(&overlap, Slot::new(0, 0, 1)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::SlotAlreadyTaken { group: GroupLabel::Reduced(1), .. }
        ));
        assert!(!ledger.is_student_busy(7, 0, 0));
        assert!(!ledger.is_room_busy(Slot::new(0, 0, 1)));

        let disjoint = Group::new(GroupLabel::Reduced(2), vec![8, 9]);
        assert!(ledger.is_free(&disjoint, Slot::new(0, 0, 1)));
    }

    #[test]
    fn test_monotonic_until_reset() {
        let mut ledger = SlotLedger::new();
        let slot = Slot::new(3, 2, 1);
        ledger.commit(&a(), slot).unwrap();
        for other in 0..5 {
            ledger.commit(&b(), Slot::new(other, 0, 0)).unwrap();
            assert!(!ledger.is_free(&a(), slot));
        }

        ledger.reset();
        assert!(ledger.is_free(&a(), slot));
        assert!(!ledger.is_student_busy(1, 3, 2));
        assert_eq!(ledger.committed_count(), 0);
    }
}
