//! Roster member record

use serde::{Deserialize, Serialize};

use super::{is_false, is_zero, AwardCategory};

/// One participant's rotation record
///
/// The `key` is an opaque caller-assigned identity, unique across all three
/// roster partitions and immutable once created. Everything else is mutated
/// in place by award and lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub key: String,
    pub name: String,
    /// Priority credit accrued by being skipped; consumed one unit per award
    #[serde(default, skip_serializing_if = "is_zero")]
    pub owed: u32,
    #[serde(rename = "lastAward", default, skip_serializing_if = "Option::is_none")]
    pub last_award: Option<AwardCategory>,
    #[serde(
        rename = "lastHadDistinction",
        default,
        skip_serializing_if = "is_false"
    )]
    pub last_had_distinction: bool,
}

impl Member {
    /// Create a new member with no award history and no owed credit
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            owed: 0,
            last_award: None,
            last_had_distinction: false,
        }
    }
}
