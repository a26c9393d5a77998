//! Whole rotation state container

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{AwardLog, Member, MemberStats};

/// Everything the rotation store owns and persists as one document
///
/// The three partitions are ordered and disjoint by member key: `active` is
/// the rotation queue (order is queue position), `inactive` holds benched
/// members, and `retired` is the terminal historical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RotationState {
    #[serde(default)]
    pub active: Vec<Member>,
    #[serde(default)]
    pub inactive: Vec<Member>,
    #[serde(default)]
    pub retired: Vec<Member>,
    #[serde(default)]
    pub log: AwardLog,
    #[serde(default)]
    pub stats: HashMap<String, MemberStats>,
}

impl RotationState {
    /// Create an empty rotation state
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the key exists in any partition
    pub fn contains_key(&self, key: &str) -> bool {
        self.active.iter().any(|m| m.key == key)
            || self.inactive.iter().any(|m| m.key == key)
            || self.retired.iter().any(|m| m.key == key)
    }

    /// Position of a key in the active queue
    pub fn active_position(&self, key: &str) -> Option<usize> {
        self.active.iter().position(|m| m.key == key)
    }

    /// Position of a key in the inactive list
    pub fn inactive_position(&self, key: &str) -> Option<usize> {
        self.inactive.iter().position(|m| m.key == key)
    }

    /// Lifetime stats for a key, zeroed if the member was never awarded
    pub fn stats_for(&self, key: &str) -> MemberStats {
        self.stats.get(key).copied().unwrap_or_default()
    }

    /// Number of members across all partitions
    pub fn member_count(&self) -> usize {
        self.active.len() + self.inactive.len() + self.retired.len()
    }
}
