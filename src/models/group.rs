//! Student group model.
//!
//! Labs are attended by groups, never by individual students. Two fixed
//! partitions of the roster exist side by side:
//!
//! | Policy | Labels | Groups |
//! |--------|--------|--------|
//! | Standard | A..E | exactly 5 |
//! | Reduced | 1..8 | up to 8 |
//!
//! Small cohorts skip both alphabets and use a single unified group.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StudentId;

/// Group sizing policy a lab requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPolicy {
    /// Five groups labelled A..E.
    Standard,
    /// Up to eight groups labelled 1..8.
    Reduced,
}

impl GroupPolicy {
    /// Maximum number of groups this policy produces.
    pub fn max_groups(self) -> usize {
        match self {
            Self::Standard => 5,
            Self::Reduced => 8,
        }
    }
}

impl fmt::Display for GroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Reduced => f.write_str("reduced"),
        }
    }
}

/// Group label.
///
/// Ordering follows the alphabets: A < B < .. < E, then 1 < 2 < .. < 8,
/// then the unified group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupLabel {
    /// Standard group, zero-based index into A..E.
    Standard(u8),
    /// Reduced group number, starting at 1.
    Reduced(u8),
    /// Single group holding the whole cohort.
    Unified,
}

impl GroupLabel {
    /// Policy this label belongs to (`None` for the unified group).
    pub fn policy(self) -> Option<GroupPolicy> {
        match self {
            Self::Standard(_) => Some(GroupPolicy::Standard),
            Self::Reduced(_) => Some(GroupPolicy::Reduced),
            Self::Unified => None,
        }
    }

    /// The `index`-th (zero-based) label of a policy's alphabet.
    pub fn nth(policy: GroupPolicy, index: usize) -> Self {
        // alphabets are at most 8 long
        let index = index as u8;
        match policy {
            GroupPolicy::Standard => Self::Standard(index),
            GroupPolicy::Reduced => Self::Reduced(index + 1),
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(idx) => write!(f, "{}", char::from(b'A' + idx)),
            Self::Reduced(n) => write!(f, "{n}"),
            Self::Unified => f.write_str("ALL"),
        }
    }
}

/// A fixed group of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group label.
    pub label: GroupLabel,
    /// Member student ids in roster order.
    pub members: Vec<StudentId>,
}

impl Group {
    /// Creates a group.
    pub fn new(label: GroupLabel, members: Vec<StudentId>) -> Self {
        Self { label, members }
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the student belongs to this group.
    pub fn contains(&self, student: StudentId) -> bool {
        self.members.contains(&student)
    }

    /// Policy tag (`None` for the unified group).
    pub fn policy(&self) -> Option<GroupPolicy> {
        self.label.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(GroupLabel::Standard(0).to_string(), "A");
        assert_eq!(GroupLabel::Standard(4).to_string(), "E");
        assert_eq!(GroupLabel::Reduced(8).to_string(), "8");
        assert_eq!(GroupLabel::Unified.to_string(), "ALL");
    }

    #[test]
    fn test_label_nth() {
        assert_eq!(GroupLabel::nth(GroupPolicy::Standard, 2), GroupLabel::Standard(2));
        assert_eq!(GroupLabel::nth(GroupPolicy::Reduced, 0), GroupLabel::Reduced(1));
    }

    #[test]
    fn test_label_ordering() {
        assert!(GroupLabel::Standard(0) < GroupLabel::Standard(1));
        assert!(GroupLabel::Reduced(2) < GroupLabel::Reduced(10));
        assert!(GroupLabel::Standard(4) < GroupLabel::Reduced(1));
    }

    #[test]
    fn test_group_policy_tag() {
        let g = Group::new(GroupLabel::Reduced(3), vec![7, 8]);
        assert_eq!(g.policy(), Some(GroupPolicy::Reduced));
        assert_eq!(g.size(), 2);
        assert!(g.contains(8));
        assert!(!g.contains(9));
        assert_eq!(Group::new(GroupLabel::Unified, vec![1]).policy(), None);
    }

    #[test]
    fn test_policy_serde_lowercase() {
        let json = serde_json::to_string(&GroupPolicy::Reduced).unwrap();
        assert_eq!(json, "\"reduced\"");
    }
}
