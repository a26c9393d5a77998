//! Append-only award history

use serde::{Deserialize, Serialize};

use super::{is_false, AwardCategory};

/// One award event as recorded at the time it happened
///
/// The record captures the member's display name at award time; a later
/// rename does not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    /// Award date, formatted `MM/DD`
    pub date: String,
    pub name: String,
    #[serde(
        rename = "hadDistinction",
        default,
        skip_serializing_if = "is_false"
    )]
    pub had_distinction: bool,
}

/// Chronological award record, one append-only column per category
///
/// Entries are never mutated or reordered after append. The log exists
/// purely for historical reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AwardLog {
    #[serde(default)]
    pub events: Vec<AwardRecord>,
    #[serde(default)]
    pub row: Vec<AwardRecord>,
    #[serde(default)]
    pub ranking: Vec<AwardRecord>,
}

impl AwardLog {
    /// Read a category's history column
    pub fn for_category(&self, category: AwardCategory) -> &[AwardRecord] {
        match category {
            AwardCategory::Event => &self.events,
            AwardCategory::Row => &self.row,
            AwardCategory::Ranking => &self.ranking,
        }
    }

    /// Append a record to a category's history column
    pub fn append(&mut self, category: AwardCategory, record: AwardRecord) {
        match category {
            AwardCategory::Event => self.events.push(record),
            AwardCategory::Row => self.row.push(record),
            AwardCategory::Ranking => self.ranking.push(record),
        }
    }

    /// Total number of recorded awards across all categories
    pub fn len(&self) -> usize {
        self.events.len() + self.row.len() + self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
