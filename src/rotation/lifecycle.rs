//! Roster lifecycle transitions
//!
//! Members move between the active, inactive, and retired partitions by
//! remove-then-append, never by copy, so a key lives in exactly one
//! partition at any time. Retirement is terminal: nothing moves a member
//! back out of the retired partition.

use crate::types::{Member, RotationState};

use super::error::{RotationError, RotationResult};

/// Add a new member to the end of the active queue
///
/// Fails with `AlreadyExists` if the key is present in any partition.
pub(crate) fn add(state: &mut RotationState, key: &str, name: &str) -> RotationResult<Member> {
    if state.contains_key(key) {
        return Err(RotationError::AlreadyExists(key.to_string()));
    }
    let member = Member::new(key, name);
    state.active.push(member.clone());
    Ok(member)
}

/// Bench an active member, preserving all fields including owed credit
pub(crate) fn deactivate(state: &mut RotationState, key: &str) -> RotationResult<Member> {
    let index = state
        .active_position(key)
        .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
    let member = state.active.remove(index);
    state.inactive.push(member.clone());
    Ok(member)
}

/// Return a benched member to the end of the active queue
pub(crate) fn reactivate(state: &mut RotationState, key: &str) -> RotationResult<Member> {
    let index = state
        .inactive_position(key)
        .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
    let member = state.inactive.remove(index);
    state.active.push(member.clone());
    Ok(member)
}

/// Move a member from either live partition into the retired record
///
/// Terminal: no operation moves a member out of `retired`.
pub(crate) fn retire(state: &mut RotationState, key: &str) -> RotationResult<Member> {
    let member = if let Some(index) = state.active_position(key) {
        state.active.remove(index)
    } else if let Some(index) = state.inactive_position(key) {
        state.inactive.remove(index)
    } else {
        return Err(RotationError::NotFound(key.to_string()));
    };
    state.retired.push(member.clone());
    Ok(member)
}

/// Swap an active member with its predecessor
///
/// Manual override, independent of owed credit. `BoundaryReached` at the
/// queue head.
pub(crate) fn promote(state: &mut RotationState, key: &str) -> RotationResult<()> {
    let index = state
        .active_position(key)
        .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
    if index == 0 {
        return Err(RotationError::BoundaryReached);
    }
    state.active.swap(index, index - 1);
    Ok(())
}

/// Swap an active member with its successor
///
/// `BoundaryReached` at the queue tail.
pub(crate) fn demote(state: &mut RotationState, key: &str) -> RotationResult<()> {
    let index = state
        .active_position(key)
        .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
    if index == state.active.len() - 1 {
        return Err(RotationError::BoundaryReached);
    }
    state.active.swap(index, index + 1);
    Ok(())
}

/// Change a member's display name
///
/// Searches active then inactive. The retired record is historical and
/// stays as written; past log entries are likewise never rewritten.
pub(crate) fn rename(
    state: &mut RotationState,
    key: &str,
    new_name: &str,
) -> RotationResult<Member> {
    let member = state
        .active
        .iter_mut()
        .chain(state.inactive.iter_mut())
        .find(|m| m.key == key)
        .ok_or_else(|| RotationError::NotFound(key.to_string()))?;
    member.name = new_name.to_string();
    Ok(member.clone())
}
