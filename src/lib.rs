//! MVP Rotation Service
//!
//! Allocates a recurring MVP designation across a roster so that everyone
//! gets a turn before anyone gets a second one. A member skipped out of
//! turn accrues an "owed" credit that the selector honors in future
//! rounds, so out-of-order awards never erase fairness.
//!
//! # Features
//!
//! - **Fair selection**: first owed member outranks the queue head
//! - **Debt accounting**: skipping a member compensates exactly the
//!   members whose turn was deferred
//! - **Three partitions**: active queue, inactive bench, terminal retired
//!   record, disjoint by member key
//! - **Durable state**: every mutation persists the whole document
//!   atomically before it commits to memory
//! - **HTTP API**: roster queries, award and lifecycle commands, text views
//!
//! # Modules
//!
//! - `types`: Structured records (Member, AwardCategory, AwardLog, stats)
//! - `rotation`: The store, selector, award transition, and lifecycle
//! - `format`: Human-readable roster / history / stats rendering
//! - `api`: Axum router and REST handlers
//! - `utils`: Atomic file writes and award-date helpers
//!
//! # Example
//!
//! ```no_run
//! use mvp_rotation::{AwardCategory, RotationStore};
//!
//! let store = RotationStore::with_file_path("data/rotation.json".to_string());
//! store.add("1001", "Alice").unwrap();
//! store.add("1002", "Bob").unwrap();
//!
//! // Bob takes the award ahead of Alice, so Alice is owed a turn
//! store.award("1002", AwardCategory::Event, false).unwrap();
//! assert_eq!(store.next_recipient().as_deref(), Some("1001"));
//! ```

pub mod api;
pub mod format;
pub mod rotation;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use rotation::{apply_award, next_index, RotationError, RotationResult, RotationStore};
pub use types::{AwardCategory, AwardLog, AwardRecord, Member, MemberStats, RotationState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
