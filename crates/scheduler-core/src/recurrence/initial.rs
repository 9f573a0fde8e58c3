use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::DateError;
use crate::recurrence::advance::next_occurrence;
use crate::recurrence::rule::validate_rule;

/// Decides the due date a created or edited task is stored with.
///
/// - no date (or an empty one) becomes `today`;
/// - a date on or after `today` is kept as is;
/// - a past date becomes `today` when there is no rule, otherwise the next
///   occurrence of the rule after `today`.
///
/// The resolved date is accepted only if it is not before `today`.
pub fn resolve_initial_date(
    requested: Option<&str>,
    raw_rule: &str,
    today: NaiveDate,
) -> Result<NaiveDate, DateError> {
    let requested = match requested {
        Some(raw) if !raw.is_empty() => parse_date(raw)?,
        _ => return Ok(today),
    };

    let resolved = if requested >= today {
        requested
    } else if raw_rule.is_empty() {
        today
    } else {
        let rule = validate_rule(raw_rule)?;
        next_occurrence(today, requested, &rule)?
    };

    accept(resolved, today)
}

fn accept(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, DateError> {
    if date < today {
        return Err(DateError::DateInPast {
            date: format_date(date),
            today: format_date(today),
        });
    }
    Ok(date)
}
