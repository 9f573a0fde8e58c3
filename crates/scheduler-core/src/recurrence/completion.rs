use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::RecurrenceError;
use crate::recurrence::advance::next_occurrence;
use crate::recurrence::rule::{validate_rule, RecurrenceRule};

/// What the store has to do with a task that was marked done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// One-off task: remove it.
    Delete,
    /// Recurring task: move it to its next occurrence.
    UpdateDate(NaiveDate),
}

/// Resolves the "mark done" transition of a task due on `current`.
///
/// Errors leave the decision to the caller; nothing is partially applied.
pub fn resolve_completion(
    current: NaiveDate,
    raw_rule: &str,
    today: NaiveDate,
) -> Result<CompletionOutcome, RecurrenceError> {
    if raw_rule.is_empty() {
        return Ok(CompletionOutcome::Delete);
    }

    let rule = validate_rule(raw_rule)?;
    let mut next = next_occurrence(today, current, &rule)?;

    // A daily task may not be rescheduled onto the day it was completed.
    if next == today {
        if let RecurrenceRule::Daily { interval } = rule {
            next = next
                .checked_add_days(Days::new(u64::from(interval)))
                .ok_or_else(|| RecurrenceError::NoOccurrence(raw_rule.to_string()))?;
            debug!(%next, "same-day daily completion shifted by one interval");
        }
    }

    Ok(CompletionOutcome::UpdateDate(next))
}
