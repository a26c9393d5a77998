//! Rotation engine - core data store
//!
//! This module contains the rotation store implementation with
//! mutex-guarded mutation, the next-recipient selector, the award
//! transition, and roster lifecycle operations.

mod award;
mod error;
mod lifecycle;
mod selector;

pub use award::apply_award;
pub use error::{RotationError, RotationResult};
pub use selector::next_index;

use std::env;
use std::fs;
use std::path::Path;

use parking_lot::Mutex;

use crate::types::{AwardCategory, Member, RotationState};
use crate::utils::atomic::atomic_write;
use crate::utils::time::award_date;

/// Rotation store with an in-memory state guarded for exclusive mutation
///
/// Every mutating operation is one critical section: lock, compute the new
/// state on a working copy, persist it atomically, then commit it to
/// memory. A persistence failure leaves the in-memory state at its
/// pre-operation value, so memory and durable storage never diverge.
/// Callers only ever receive clones of the state, never references into it.
pub struct RotationStore {
    pub(crate) file_path: String,
    pub(crate) state: Mutex<RotationState>,
}

impl RotationStore {
    /// Create a store at the path from `ROTATION_FILE_PATH` (default
    /// `data/rotation.json`), loading existing state if present
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("data").join("rotation.json");

        let file_path = match env::var("ROTATION_FILE_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(file_path)
    }

    /// Create a store with a custom file path
    pub fn with_file_path(file_path: String) -> Self {
        let state = Self::load_state_from_file(&file_path).unwrap_or_else(|e| {
            eprintln!(
                "Warning: could not load rotation state from {}: {}. Starting empty.",
                file_path, e
            );
            RotationState::default()
        });

        Self {
            file_path,
            state: Mutex::new(state),
        }
    }

    /// Load state from file; a missing file yields the well-formed default
    fn load_state_from_file(file_path: &str) -> RotationResult<RotationState> {
        if !Path::new(file_path).exists() {
            return Ok(RotationState::default());
        }

        let content = fs::read_to_string(file_path)?;
        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Persist state to file atomically
    fn persist(&self, state: &RotationState) -> RotationResult<()> {
        let content = serde_json::to_string_pretty(state)?;
        atomic_write(&self.file_path, &content)?;
        Ok(())
    }

    /// Run one mutation as a critical section with rollback
    ///
    /// The closure works on a copy of the current state. Only after it
    /// succeeds AND the copy is durably persisted does the copy replace the
    /// in-memory state; any failure leaves memory untouched.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut RotationState) -> RotationResult<T>,
    ) -> RotationResult<T> {
        let mut guard = self.state.lock();
        let mut working = guard.clone();
        let result = op(&mut working)?;
        self.persist(&working)?;
        *guard = working;
        Ok(result)
    }

    /// Get the state file path
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Snapshot of the full state (partitions, stats, log)
    pub fn snapshot(&self) -> RotationState {
        self.state.lock().clone()
    }

    /// Key of the member the fairness rule designates as next, if any
    pub fn next_recipient(&self) -> Option<String> {
        let state = self.state.lock();
        next_index(&state.active).map(|i| state.active[i].key.clone())
    }
}

impl Default for RotationStore {
    fn default() -> Self {
        Self::new()
    }
}

// Mutating operations, each delegating to the pure state transforms
impl RotationStore {
    /// Add a new member to the end of the active queue
    pub fn add(&self, key: &str, name: &str) -> RotationResult<Member> {
        self.mutate(|state| lifecycle::add(state, key, name))
    }

    /// Award to a member of the active queue, by key
    ///
    /// Runs the full transition: queue rearrangement with owed-credit
    /// redistribution, stats update, and log append.
    pub fn award(
        &self,
        key: &str,
        category: AwardCategory,
        had_distinction: bool,
    ) -> RotationResult<Member> {
        self.mutate(|state| {
            let index = state
                .active_position(key)
                .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
            award::award(state, index, category, had_distinction, award_date())
        })
    }

    /// Move an active member to the inactive list
    pub fn deactivate(&self, key: &str) -> RotationResult<Member> {
        self.mutate(|state| lifecycle::deactivate(state, key))
    }

    /// Move an inactive member back to the end of the active queue
    pub fn reactivate(&self, key: &str) -> RotationResult<Member> {
        self.mutate(|state| lifecycle::reactivate(state, key))
    }

    /// Permanently move a member to the retired record
    pub fn retire(&self, key: &str) -> RotationResult<Member> {
        self.mutate(|state| lifecycle::retire(state, key))
    }

    /// Move an active member up one queue position
    pub fn promote(&self, key: &str) -> RotationResult<()> {
        self.mutate(|state| lifecycle::promote(state, key))
    }

    /// Move an active member down one queue position
    pub fn demote(&self, key: &str) -> RotationResult<()> {
        self.mutate(|state| lifecycle::demote(state, key))
    }

    /// Change a member's display name
    pub fn rename(&self, key: &str, new_name: &str) -> RotationResult<Member> {
        self.mutate(|state| lifecycle::rename(state, key, new_name))
    }
}
