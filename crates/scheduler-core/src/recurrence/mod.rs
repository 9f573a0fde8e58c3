//! Recurrence date resolution.
//!
//! Everything in this module is a pure function of its inputs. "Today" is
//! always passed in by the caller, captured once per logical operation.
//!
//! - [`rule`]: parsing and validation of rule strings
//! - [`month_day`]: last / second-to-last day of a month
//! - [`advance`]: next occurrence of a rule
//! - [`initial`]: due date of a created or edited task
//! - [`completion`]: what happens when a task is marked done

pub mod advance;
pub mod completion;
pub mod initial;
pub mod month_day;
pub mod rule;

pub use advance::next_occurrence;
pub use completion::{resolve_completion, CompletionOutcome};
pub use initial::resolve_initial_date;
pub use rule::{validate_rule, MonthDay, RecurrenceRule, RuleKind};

use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::{DateError, RecurrenceError};

/// String-level next occurrence: `date` and the result are `YYYYMMDD`.
///
/// Unlike [`next_occurrence`], an empty `repeat` is an error here since
/// there is nothing to advance.
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String, DateError> {
    let anchor = parse_date(date)?;
    let rule = validate_rule(repeat)?;
    if rule.is_none() {
        return Err(RecurrenceError::InvalidRule(repeat.to_string()).into());
    }
    Ok(format_date(next_occurrence(now, anchor, &rule)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_date_round_trip() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
        assert_eq!(next_date(now, "20240113", "d 7").unwrap(), "20240127");
        assert_eq!(next_date(now, "20240126", "d 1").unwrap(), "20240127");
        assert_eq!(next_date(now, "20240229", "y").unwrap(), "20250228");
    }

    #[test]
    fn test_next_date_rejects_bad_input() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
        assert_eq!(
            next_date(now, "2024-01-13", "d 7"),
            Err(DateError::InvalidDate("2024-01-13".to_string()))
        );
        assert_eq!(
            next_date(now, "20240113", ""),
            Err(DateError::Recurrence(RecurrenceError::InvalidRule(String::new())))
        );
        assert_eq!(
            next_date(now, "20240113", "k 34"),
            Err(DateError::Recurrence(RecurrenceError::InvalidRule("k 34".to_string())))
        );
    }
}
