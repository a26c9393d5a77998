//! Award categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification tag of an award event
///
/// The rotation recognizes three fixed kinds of MVP award. Each category
/// keeps its own history column in the [`AwardLog`](super::AwardLog) and
/// its own counter in [`MemberStats`](super::MemberStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardCategory {
    Event,
    Row,
    Ranking,
}

impl AwardCategory {
    /// All categories in display order
    pub const ALL: [AwardCategory; 3] = [
        AwardCategory::Event,
        AwardCategory::Row,
        AwardCategory::Ranking,
    ];

    /// Lowercase name used in the persisted document and API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardCategory::Event => "event",
            AwardCategory::Row => "row",
            AwardCategory::Ranking => "ranking",
        }
    }

    /// Symbol shown next to a member's last award in roster views
    pub fn symbol(&self) -> &'static str {
        match self {
            AwardCategory::Event => "\u{1F3AF}",
            AwardCategory::Row => "\u{2B50}",
            AwardCategory::Ranking => "\u{1F3C6}",
        }
    }
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AwardCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "event" | "events" => Ok(AwardCategory::Event),
            "row" => Ok(AwardCategory::Row),
            "ranking" => Ok(AwardCategory::Ranking),
            other => Err(format!("unknown award category: {}", other)),
        }
    }
}
