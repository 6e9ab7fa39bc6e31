//! Schedule (solution) model.
//!
//! A schedule is the output of one engine run: the committed
//! group-lab-slot assignments and the requirements that found no slot.
//! Both lists are in commit order, which is also catalog order.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{GroupLabel, LabId, StudentId};

/// A concrete bookable unit: (day, window, room).
///
/// `window` and `room` are indices into the catalog's declared lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Day index, starting at 0.
    pub day: u32,
    /// Window index within the day.
    pub window: usize,
    /// Room index.
    pub room: usize,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: u32, window: usize, room: usize) -> Self {
        Self { day, window, room }
    }
}

/// A committed group-lab-slot binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Attending group.
    pub group: GroupLabel,
    /// Lab held.
    pub lab_id: LabId,
    /// Booked slot.
    pub slot: Slot,
    /// Attending students (the group's members at commit time).
    pub students: Vec<StudentId>,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(group: GroupLabel, lab_id: LabId, slot: Slot, students: Vec<StudentId>) -> Self {
        Self {
            group,
            lab_id,
            slot,
            students,
        }
    }

    /// Number of attending students.
    #[inline]
    pub fn group_size(&self) -> usize {
        self.students.len()
    }
}

/// A (group, lab) pair for which no slot was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnscheduledRequirement {
    /// Group left without a session.
    pub group: GroupLabel,
    /// Lab the group could not attend.
    pub lab_id: LabId,
}

/// A double booking found by [`Schedule::conflicts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Type of conflict.
    pub kind: ConflictKind,
    /// Index of the earlier assignment.
    pub first: usize,
    /// Index of the later assignment.
    pub second: usize,
}

/// Classification of double bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two assignments share a (day, window, room).
    RoomDoubleBooked,
    /// One group attends two labs in the same (day, window).
    GroupDoubleBooked,
    /// Two different groups sharing a student meet in the same (day, window).
    StudentDoubleBooked,
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Committed assignments in commit order.
    pub assignments: Vec<Assignment>,
    /// Requirements left without a slot, in catalog order.
    pub unscheduled: Vec<UnscheduledRequirement>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Records an unsatisfied requirement.
    pub fn add_unscheduled(&mut self, requirement: UnscheduledRequirement) {
        self.unscheduled.push(requirement);
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of requested (group, lab) pairs.
    pub fn requested_count(&self) -> usize {
        self.assignments.len() + self.unscheduled.len()
    }

    /// Whether every requirement was satisfied.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Finds the assignment of a group to a lab.
    pub fn assignment_for(&self, lab_id: LabId, group: GroupLabel) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.lab_id == lab_id && a.group == group)
    }

    /// Returns all assignments for a lab.
    pub fn assignments_for_lab(&self, lab_id: LabId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.lab_id == lab_id)
            .collect()
    }

    /// Returns all assignments for a group.
    pub fn assignments_for_group(&self, group: GroupLabel) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.group == group)
            .collect()
    }

    /// Returns all assignments held in a room (by room index).
    pub fn assignments_for_room(&self, room: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot.room == room)
            .collect()
    }

    /// Unscheduled requirements for a lab.
    pub fn unscheduled_for_lab(&self, lab_id: LabId) -> Vec<&UnscheduledRequirement> {
        self.unscheduled
            .iter()
            .filter(|u| u.lab_id == lab_id)
            .collect()
    }

    /// Audits the assignment list for double bookings.
    ///
    /// Empty for every schedule the engine produces.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let mut rooms: HashMap<Slot, usize> = HashMap::new();
        let mut groups: HashMap<(GroupLabel, u32, usize), usize> = HashMap::new();
        let mut students: HashMap<(StudentId, u32, usize), usize> = HashMap::new();
        let mut student_pairs: HashSet<(usize, usize)> = HashSet::new();

        for (idx, a) in self.assignments.iter().enumerate() {
            if let Some(&first) = rooms.get(&a.slot) {
                conflicts.push(Conflict {
                    kind: ConflictKind::RoomDoubleBooked,
                    first,
                    second: idx,
                });
            } else {
                rooms.insert(a.slot, idx);
            }

            let key = (a.group, a.slot.day, a.slot.window);
            if let Some(&first) = groups.get(&key) {
                conflicts.push(Conflict {
                    kind: ConflictKind::GroupDoubleBooked,
                    first,
                    second: idx,
                });
            } else {
                groups.insert(key, idx);
            }

            for &s in &a.students {
                let key = (s, a.slot.day, a.slot.window);
                match students.get(&key) {
                    Some(&first) if self.assignments[first].group != a.group => {
                        if student_pairs.insert((first, idx)) {
                            conflicts.push(Conflict {
                                kind: ConflictKind::StudentDoubleBooked,
                                first,
                                second: idx,
                            });
                        }
                    }
                    Some(_) => {}
                    None => {
                        students.insert(key, idx);
                    }
                }
            }
        }

        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(group: GroupLabel, lab: LabId, day: u32, window: usize, room: usize) -> Assignment {
        let base = match group {
            GroupLabel::Standard(i) => u32::from(i) * 10,
            GroupLabel::Reduced(n) => 100 + u32::from(n) * 10,
            GroupLabel::Unified => 1000,
        };
        Assignment::new(group, lab, Slot::new(day, window, room), vec![base + 1, base + 2])
    }

    #[test]
    fn test_schedule_queries() {
        let mut s = Schedule::new();
        s.add_assignment(a(GroupLabel::Standard(0), 1, 0, 0, 0));
        s.add_assignment(a(GroupLabel::Standard(1), 1, 0, 0, 1));
        s.add_assignment(a(GroupLabel::Standard(0), 2, 0, 1, 0));
        s.add_unscheduled(UnscheduledRequirement {
            group: GroupLabel::Standard(1),
            lab_id: 2,
        });

        assert_eq!(s.assignment_count(), 3);
        assert_eq!(s.requested_count(), 4);
        assert!(!s.is_complete());
        assert_eq!(s.assignments_for_lab(1).len(), 2);
        assert_eq!(s.assignments_for_group(GroupLabel::Standard(0)).len(), 2);
        assert_eq!(s.assignments_for_room(0).len(), 2);
        assert_eq!(s.unscheduled_for_lab(2).len(), 1);
        assert_eq!(
            s.assignment_for(2, GroupLabel::Standard(0)).map(|x| x.slot),
            Some(Slot::new(0, 1, 0))
        );
        assert!(s.assignment_for(2, GroupLabel::Standard(1)).is_none());
    }

    #[test]
    fn test_conflicts_clean() {
        let mut s = Schedule::new();
        s.add_assignment(a(GroupLabel::Standard(0), 1, 0, 0, 0));
        s.add_assignment(a(GroupLabel::Standard(0), 2, 0, 1, 0));
        s.add_assignment(a(GroupLabel::Standard(1), 2, 0, 0, 1));
        assert!(s.conflicts().is_empty());
    }

    #[test]
    fn test_conflicts_detected() {
        let mut s = Schedule::new();
        s.add_assignment(a(GroupLabel::Standard(0), 1, 0, 0, 0));
        s.add_assignment(a(GroupLabel::Standard(1), 2, 0, 0, 0)); // same room slot
        s.add_assignment(a(GroupLabel::Standard(0), 3, 0, 0, 2)); // group busy

        let conflicts = s.conflicts();
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomDoubleBooked);
        assert_eq!((conflicts[0].first, conflicts[0].second), (0, 1));
        assert_eq!(conflicts[1].kind, ConflictKind::GroupDoubleBooked);
        assert_eq!((conflicts[1].first, conflicts[1].second), (0, 2));
    }

    #[test]
    fn test_student_conflict_across_policies() {
        let mut s = Schedule::new();
        s.add_assignment(Assignment::new(
            GroupLabel::Standard(0),
            1,
            Slot::new(0, 0, 0),
            vec![1, 2, 3],
        ));
        // reduced group 1 shares students 1 and 2 with group A
        s.add_assignment(Assignment::new(
            GroupLabel::Reduced(1),
            2,
            Slot::new(0, 0, 1),
            vec![1, 2],
        ));
        s.add_assignment(Assignment::new(
            GroupLabel::Reduced(2),
            2,
            Slot::new(0, 0, 2),
            vec![4, 5],
        ));

        let conflicts = s.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::StudentDoubleBooked);
        assert_eq!((conflicts[0].first, conflicts[0].second), (0, 1));
    }
}
