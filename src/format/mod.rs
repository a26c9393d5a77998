//! Human-readable roster, history, and stats views
//!
//! Pure read-only rendering over a state snapshot. The formatting layer
//! never mutates what it is given; all functions take shared references and
//! return fresh strings.

use crate::rotation::next_index;
use crate::types::{AwardCategory, AwardRecord, Member, RotationState};
use crate::utils::time::month_name;

const DISTINCTION_MARK: &str = "\u{1F451}";
const LOG_COLUMN_WIDTH: usize = 25;
const STATS_COLUMN_WIDTH: usize = 30;
const STATS_NAME_WIDTH: usize = 15;

/// Render the active queue with owed markers and the next-recipient pointer
///
/// A blank line separates the members who already had their turn from the
/// first owed member, showing the division in the queue at a glance.
pub fn format_roster(state: &RotationState) -> String {
    if state.active.is_empty() {
        return "No members in rotation.".to_string();
    }

    let next = next_index(&state.active);
    let divider = state.active.iter().position(|m| m.owed > 0);

    let mut lines = Vec::new();
    for (i, member) in state.active.iter().enumerate() {
        if divider == Some(i) && i > 0 {
            lines.push(String::new());
        }

        let owed = if member.owed > 0 {
            format!(" (+{})", member.owed)
        } else {
            String::new()
        };
        let symbol = member
            .last_award
            .map(|c| format!(" {}", c.symbol()))
            .unwrap_or_default();
        let mark = if member.last_had_distinction {
            DISTINCTION_MARK
        } else {
            ""
        };

        if next == Some(i) {
            lines.push(format!(
                ">>> {}{}{}{} <NEXT",
                member.name, owed, symbol, mark
            ));
        } else {
            lines.push(format!("{}{}{}{}", member.name, owed, symbol, mark));
        }
    }

    lines.join("\n")
}

/// Render the inactive list
pub fn format_inactive(state: &RotationState) -> String {
    if state.inactive.is_empty() {
        return "No inactive members.".to_string();
    }
    state
        .inactive
        .iter()
        .map(|m| m.name.clone())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render award history as three date-aligned columns grouped by month
pub fn format_log(state: &RotationState) -> String {
    let mut dates: Vec<&str> = AwardCategory::ALL
        .iter()
        .flat_map(|c| state.log.for_category(*c))
        .map(|r| r.date.as_str())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    if dates.is_empty() {
        return "No awards recorded yet.".to_string();
    }

    let mut lines = Vec::new();
    let mut current_month: Option<&str> = None;
    let mut first = true;

    for date in dates {
        let month = month_name(date);
        if first || month != current_month {
            if !first {
                lines.push(String::new());
            }
            lines.push(format!("** {} **", month.unwrap_or("Unknown")));
            current_month = month;
            first = false;
        }

        let event = column_entry(state.log.for_category(AwardCategory::Event), date);
        let row = column_entry(state.log.for_category(AwardCategory::Row), date);
        let ranking = column_entry(state.log.for_category(AwardCategory::Ranking), date);

        lines.push(format!(
            "{:<w$}{:<w$}{}",
            event,
            row,
            ranking,
            w = LOG_COLUMN_WIDTH
        ));
    }

    let header = format!(
        "{:<w$}{:<w$}{}",
        "EVENTS",
        "ROW",
        "RANKING",
        w = LOG_COLUMN_WIDTH
    );
    format!(
        "{}\n{}\n{}",
        header,
        "-".repeat(LOG_COLUMN_WIDTH * 3),
        lines.join("\n")
    )
}

fn column_entry(records: &[AwardRecord], date: &str) -> String {
    records
        .iter()
        .find(|r| r.date == date)
        .map(|r| {
            let mark = if r.had_distinction {
                format!(" {}", DISTINCTION_MARK)
            } else {
                String::new()
            };
            format!("{} {}{}", r.date, r.name, mark)
        })
        .unwrap_or_default()
}

/// Render per-member lifetime counters in three partition columns
pub fn format_stats(state: &RotationState) -> String {
    if state.member_count() == 0 {
        return "No stats available yet.".to_string();
    }

    let rows = state
        .active
        .len()
        .max(state.inactive.len())
        .max(state.retired.len());

    let mut lines = Vec::new();
    lines.push(format!(
        "{:<w$}{:<w$}{}",
        "ACTIVE",
        "INACTIVE",
        "RETIRED",
        w = STATS_COLUMN_WIDTH
    ));
    lines.push("-".repeat(STATS_COLUMN_WIDTH * 3));

    for i in 0..rows {
        let active = stats_entry(state, state.active.get(i));
        let inactive = stats_entry(state, state.inactive.get(i));
        let retired = stats_entry(state, state.retired.get(i));
        lines.push(format!(
            "{:<w$}{:<w$}{}",
            active,
            inactive,
            retired,
            w = STATS_COLUMN_WIDTH
        ));
    }

    lines.join("\n")
}

fn stats_entry(state: &RotationState, member: Option<&Member>) -> String {
    let Some(member) = member else {
        return String::new();
    };
    let stats = state.stats_for(&member.key);
    let name: String = member.name.chars().take(STATS_NAME_WIDTH).collect();
    format!(
        "{}: {}{} {}{} {}{} {}{}",
        name,
        AwardCategory::Event.symbol(),
        stats.events,
        AwardCategory::Row.symbol(),
        stats.row,
        AwardCategory::Ranking.symbol(),
        stats.ranking,
        DISTINCTION_MARK,
        stats.distinctions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AwardRecord, Member};

    fn sample_state() -> RotationState {
        let mut state = RotationState::new();
        state.active.push(Member::new("a", "Alice"));
        state.active.push(Member {
            owed: 2,
            last_award: Some(AwardCategory::Event),
            ..Member::new("b", "Bob")
        });
        state.inactive.push(Member::new("c", "Cara"));
        state
    }

    #[test]
    fn test_roster_marks_next_and_owed() {
        let text = format_roster(&sample_state());
        let lines: Vec<&str> = text.lines().collect();

        // Bob carries owed credit, so he is next despite being second
        assert_eq!(lines[0], "Alice");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with(">>> Bob (+2)"));
        assert!(lines[2].ends_with("<NEXT"));
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(format_roster(&RotationState::new()), "No members in rotation.");
        assert_eq!(
            format_inactive(&RotationState::new()),
            "No inactive members."
        );
    }

    #[test]
    fn test_log_groups_by_month() {
        let mut state = RotationState::new();
        state.log.append(
            AwardCategory::Event,
            AwardRecord {
                date: "01/05".to_string(),
                name: "Alice".to_string(),
                had_distinction: false,
            },
        );
        state.log.append(
            AwardCategory::Row,
            AwardRecord {
                date: "02/10".to_string(),
                name: "Bob".to_string(),
                had_distinction: true,
            },
        );

        let text = format_log(&state);
        assert!(text.contains("** January **"));
        assert!(text.contains("** February **"));
        assert!(text.contains("01/05 Alice"));
        assert!(text.contains("02/10 Bob"));
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(format_log(&RotationState::new()), "No awards recorded yet.");
    }

    #[test]
    fn test_stats_lists_all_partitions() {
        let mut state = sample_state();
        state.retired.push(Member::new("d", "Dana"));
        state
            .stats
            .entry("b".to_string())
            .or_default()
            .record(AwardCategory::Event, true);

        let text = format_stats(&state);
        assert!(text.contains("ACTIVE"));
        assert!(text.contains("RETIRED"));
        assert!(text.contains("Bob:"));
        assert!(text.contains("Dana:"));
    }
}
