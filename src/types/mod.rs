//! Data types for the MVP rotation service
//!
//! This module contains the structured records persisted by the store:
//! roster members, award categories, per-member statistics, the award
//! history log, and the whole-state container.

mod category;
mod log;
mod member;
mod state;
mod stats;

pub use category::AwardCategory;
pub use log::{AwardLog, AwardRecord};
pub use member::Member;
pub use state::RotationState;
pub use stats::MemberStats;

/// Check if value is false (for skip_serializing_if)
pub fn is_false(val: &bool) -> bool {
    !*val
}

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u32) -> bool {
    *val == 0
}
