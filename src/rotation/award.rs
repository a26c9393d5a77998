//! Award transition
//!
//! Awarding out of strict queue order must not erase fairness: every member
//! whose turn was effectively deferred by the decision gains exactly one
//! unit of owed credit, and members already carrying credit keep their
//! earned priority. The index arithmetic here is the contract of the whole
//! system, so it lives in a pure function over the active queue with no I/O
//! anywhere near it.

use crate::types::{AwardCategory, AwardRecord, Member, RotationState};

use super::error::{RotationError, RotationResult};
use super::selector::next_index;

/// Apply an award to the active queue and reinsert the awardee
///
/// The awardee is removed, re-scored (owed consumed, last-award fields set),
/// and reinserted at the designated-next slot. Who gets compensated depends
/// on where the awardee stood relative to the designated next recipient:
///
/// - awardee ahead of the debt-holder: everyone behind the debt-holder was
///   pushed back one turn, so each gains one owed; the debt-holder keeps
///   their priority untouched
/// - awardee behind the next-in-line: everyone from the next-in-line up to
///   (but excluding) the awardee's old slot was skipped over, so each gains
///   one owed
/// - awardee is exactly the next-in-line: nobody was skipped
///
/// Returns the updated awardee. `InvalidIndex` is the only failure.
pub fn apply_award(
    active: &mut Vec<Member>,
    chosen_index: usize,
    category: AwardCategory,
    had_distinction: bool,
) -> RotationResult<Member> {
    if chosen_index >= active.len() {
        return Err(RotationError::InvalidIndex {
            index: chosen_index,
            len: active.len(),
        });
    }

    // Evaluated before the removal: the chosen member is still in the queue
    let orig_next = next_index(active).unwrap_or(0);

    let mut chosen = active[chosen_index].clone();
    if chosen.owed > 0 {
        chosen.owed -= 1;
    }
    chosen.last_award = Some(category);
    chosen.last_had_distinction = had_distinction;

    active.remove(chosen_index);

    // The designated-next slot in the shortened queue
    let next = if orig_next > chosen_index {
        orig_next - 1
    } else {
        orig_next
    };

    if chosen_index < orig_next {
        // Everyone behind the debt-holder lost a turn
        for member in active.iter_mut().skip(next + 1) {
            member.owed += 1;
        }
    } else if chosen_index > orig_next {
        // The next-in-line and everyone up to the awardee's old slot
        // was skipped
        for member in active[next..chosen_index].iter_mut() {
            member.owed += 1;
        }
    }

    active.insert(next, chosen.clone());

    Ok(chosen)
}

/// Full award transition: queue rearrangement, stats, and log append
///
/// Commits all three effects to the working state or none (the queue step
/// is the only fallible one and runs first).
pub(crate) fn award(
    state: &mut RotationState,
    chosen_index: usize,
    category: AwardCategory,
    had_distinction: bool,
    date: String,
) -> RotationResult<Member> {
    let awarded = apply_award(&mut state.active, chosen_index, category, had_distinction)?;

    state
        .stats
        .entry(awarded.key.clone())
        .or_default()
        .record(category, had_distinction);

    state.log.append(
        category,
        AwardRecord {
            date,
            name: awarded.name.clone(),
            had_distinction,
        },
    );

    Ok(awarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(key: &str, owed: u32) -> Member {
        Member {
            owed,
            ..Member::new(key, key)
        }
    }

    fn keys(active: &[Member]) -> Vec<&str> {
        active.iter().map(|m| m.key.as_str()).collect()
    }

    fn owed(active: &[Member]) -> Vec<u32> {
        active.iter().map(|m| m.owed).collect()
    }

    #[test]
    fn test_award_designated_next_is_neutral() {
        let mut active = vec![member("a", 0), member("b", 0), member("c", 0)];

        let awarded =
            apply_award(&mut active, 0, AwardCategory::Event, false).unwrap();

        assert_eq!(awarded.key, "a");
        assert_eq!(awarded.owed, 0);
        assert_eq!(awarded.last_award, Some(AwardCategory::Event));
        assert_eq!(keys(&active), ["a", "b", "c"]);
        assert_eq!(owed(&active), [0, 0, 0]);
    }

    #[test]
    fn test_forward_skip_compensates_everyone_jumped_over() {
        // The documented scenario: no debt, award the tail member
        let mut active = vec![member("a", 0), member("b", 0), member("c", 0)];

        let awarded = apply_award(&mut active, 2, AwardCategory::Event, false).unwrap();

        assert_eq!(awarded.key, "c");
        assert_eq!(keys(&active), ["c", "a", "b"]);
        assert_eq!(owed(&active), [0, 1, 1]);
    }

    #[test]
    fn test_forward_skip_range_is_exact() {
        // next = 1 (first owed); awarding index 3 compensates positions 1..3
        let mut active = vec![
            member("a", 0),
            member("b", 1),
            member("c", 0),
            member("d", 0),
            member("e", 0),
        ];

        let awarded = apply_award(&mut active, 3, AwardCategory::Row, false).unwrap();

        assert_eq!(awarded.key, "d");
        assert_eq!(keys(&active), ["a", "d", "b", "c", "e"]);
        // b and c gain one; a and e are untouched
        assert_eq!(owed(&active), [0, 0, 2, 1, 0]);
    }

    #[test]
    fn test_backward_skip_leaves_debt_holder_untouched() {
        // next = 2 (first owed); awarding index 0 pushes back everyone
        // behind the debt-holder, while the debt-holder keeps priority
        let mut active = vec![
            member("a", 0),
            member("b", 0),
            member("c", 1),
            member("d", 0),
        ];

        let awarded = apply_award(&mut active, 0, AwardCategory::Ranking, false).unwrap();

        assert_eq!(awarded.key, "a");
        // a lands in the slot just ahead of the debt-holder; b, already
        // ahead of the debt-holder, is not compensated
        assert_eq!(keys(&active), ["b", "a", "c", "d"]);
        assert_eq!(owed(&active), [0, 0, 1, 1]);
    }

    #[test]
    fn test_owed_award_consumes_one_credit() {
        let mut active = vec![member("a", 0), member("b", 2)];

        let awarded = apply_award(&mut active, 1, AwardCategory::Event, true).unwrap();

        assert_eq!(awarded.key, "b");
        assert_eq!(awarded.owed, 1);
        assert!(awarded.last_had_distinction);
        // b was the designated next: nobody is compensated and b keeps
        // the slot it occupied
        assert_eq!(keys(&active), ["a", "b"]);
        assert_eq!(owed(&active), [0, 1]);
    }

    #[test]
    fn test_single_member_queue() {
        let mut active = vec![member("a", 0)];

        let awarded = apply_award(&mut active, 0, AwardCategory::Row, false).unwrap();

        assert_eq!(awarded.key, "a");
        assert_eq!(keys(&active), ["a"]);
        assert_eq!(owed(&active), [0]);
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        let mut active = vec![member("a", 0)];

        let err = apply_award(&mut active, 1, AwardCategory::Event, false).unwrap_err();
        assert!(matches!(
            err,
            RotationError::InvalidIndex { index: 1, len: 1 }
        ));
        // Queue is untouched on failure
        assert_eq!(keys(&active), ["a"]);
    }

    #[test]
    fn test_full_transition_updates_stats_and_log() {
        let mut state = RotationState::new();
        state.active = vec![member("a", 0), member("b", 0)];

        let awarded = award(
            &mut state,
            1,
            AwardCategory::Event,
            true,
            "03/14".to_string(),
        )
        .unwrap();

        assert_eq!(awarded.key, "b");
        let stats = state.stats_for("b");
        assert_eq!(stats.events, 1);
        assert_eq!(stats.distinctions, 1);

        let column = state.log.for_category(AwardCategory::Event);
        assert_eq!(column.len(), 1);
        assert_eq!(column[0].date, "03/14");
        assert_eq!(column[0].name, "b");
        assert!(column[0].had_distinction);
    }

    #[test]
    fn test_failed_transition_touches_nothing() {
        let mut state = RotationState::new();
        state.active = vec![member("a", 0)];

        let err = award(
            &mut state,
            5,
            AwardCategory::Row,
            false,
            "03/14".to_string(),
        )
        .unwrap_err();

        assert!(matches!(err, RotationError::InvalidIndex { .. }));
        assert!(state.stats.is_empty());
        assert!(state.log.is_empty());
    }
}
