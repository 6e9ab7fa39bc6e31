//! Roster partitioning into lab groups.
//!
//! # Algorithm
//!
//! 1. A roster at or below the small-cohort threshold becomes one unified
//!    group, whatever the policy.
//! 2. Otherwise the policy fixes the group count: 5 for standard,
//!    up to 8 for reduced (never more groups than students).
//! 3. Sizes come from integer division; the remainder adds one student to
//!    each of the first groups.
//! 4. Students fill groups as contiguous blocks in roster order.
//!
//! The same roster always yields the same groups.

use crate::error::ScheduleError;
use crate::models::{Group, GroupLabel, GroupPolicy, Roster, StudentId};

/// Default small-cohort threshold.
pub const SMALL_COHORT_THRESHOLD: usize = 5;

/// Splits rosters into groups.
///
/// # Example
///
/// ```
/// use lab_rotation::models::{GroupPolicy, Roster};
/// use lab_rotation::partition::GroupPartitioner;
///
/// let roster = Roster::anonymous(12);
/// let groups = GroupPartitioner::new()
///     .partition(&roster, GroupPolicy::Standard)
///     .unwrap();
/// let sizes: Vec<usize> = groups.iter().map(|g| g.size()).collect();
/// assert_eq!(sizes, vec![3, 3, 2, 2, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPartitioner {
    small_cohort_threshold: usize,
}

impl GroupPartitioner {
    /// Creates a partitioner with the default small-cohort threshold.
    pub fn new() -> Self {
        Self {
            small_cohort_threshold: SMALL_COHORT_THRESHOLD,
        }
    }

    /// Sets the small-cohort threshold.
    pub fn with_small_cohort_threshold(mut self, threshold: usize) -> Self {
        self.small_cohort_threshold = threshold;
        self
    }

    /// Small-cohort threshold in use.
    pub fn small_cohort_threshold(&self) -> usize {
        self.small_cohort_threshold
    }

    /// Whether a roster of `size` students is scheduled as one group.
    pub fn is_small_cohort(&self, size: usize) -> bool {
        size <= self.small_cohort_threshold
    }

    /// Partitions a roster under a policy.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidRosterSize`] if the roster is empty.
    pub fn partition(
        &self,
        roster: &Roster,
        policy: GroupPolicy,
    ) -> Result<Vec<Group>, ScheduleError> {
        let n = roster.len();
        if n == 0 {
            return Err(ScheduleError::InvalidRosterSize);
        }

        let ids: Vec<StudentId> = roster.ids().collect();
        if self.is_small_cohort(n) {
            return Ok(vec![Group::new(GroupLabel::Unified, ids)]);
        }

        // never produce empty groups, even with a lowered threshold
        let count = policy.max_groups().min(n);

        let mut groups = Vec::with_capacity(count);
        let mut start = 0;
        for (idx, size) in split_sizes(n, count).into_iter().enumerate() {
            let end = start + size;
            groups.push(Group::new(
                GroupLabel::nth(policy, idx),
                ids[start..end].to_vec(),
            ));
            start = end;
        }

        Ok(groups)
    }
}

impl Default for GroupPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

/// Sizes of `count` groups covering `n` students.
///
/// The remainder goes to the earliest groups, so sizes never differ by
/// more than one. Returns an empty list when `count` is zero.
pub fn split_sizes(n: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let base = n / count;
    let remainder = n % count;
    (0..count)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}
