//! Per-member cumulative award counters

use serde::{Deserialize, Serialize};

use super::{is_zero, AwardCategory};

/// Lifetime award counters for one member
///
/// Created lazily on a member's first award and kept even after the member
/// retires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MemberStats {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub events: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub row: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ranking: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub distinctions: u32,
}

impl MemberStats {
    /// Count for one category
    pub fn for_category(&self, category: AwardCategory) -> u32 {
        match category {
            AwardCategory::Event => self.events,
            AwardCategory::Row => self.row,
            AwardCategory::Ranking => self.ranking,
        }
    }

    /// Record one award in `category`, with its optional distinction
    pub fn record(&mut self, category: AwardCategory, had_distinction: bool) {
        match category {
            AwardCategory::Event => self.events += 1,
            AwardCategory::Row => self.row += 1,
            AwardCategory::Ranking => self.ranking += 1,
        }
        if had_distinction {
            self.distinctions += 1;
        }
    }

    /// Total awards across all categories
    pub fn total(&self) -> u32 {
        self.events + self.row + self.ranking
    }
}
