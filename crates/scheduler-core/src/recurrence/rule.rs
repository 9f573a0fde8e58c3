use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::RecurrenceError;
use crate::recurrence::month_day::{DayOffset, MonthLength};

/// Largest accepted interval of a daily rule.
pub const MAX_DAILY_INTERVAL: u32 = 400;

/// A parsed and validated recurrence rule.
///
/// The textual grammar is a single space separated line:
///
/// | rule        | meaning                                                   |
/// |-------------|-----------------------------------------------------------|
/// | `d 7`       | every 7 days (1..=400)                                    |
/// | `w 1,3`     | on Mondays and Wednesdays (1 = Monday .. 7 = Sunday)      |
/// | `m 1,-1`    | on the 1st and the last day of every month                |
/// | `m 15 3,9`  | on the 15th of March and September                        |
/// | `y`         | on the same day every year                                |
///
/// The empty string is [`RecurrenceRule::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecurrenceRule {
    #[default]
    None,
    Daily {
        interval: u32,
    },
    Weekly {
        /// ISO weekday numbers, 1 = Monday .. 7 = Sunday.
        weekdays: BTreeSet<u32>,
    },
    Monthly {
        days: BTreeSet<MonthDay>,
        /// Wanted months, 1..=12. Empty means every month.
        months: BTreeSet<u32>,
    },
    Yearly,
}

/// A wanted day of a monthly rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthDay {
    /// A fixed day of the month, 1..=31.
    Day(u32),
    /// A day counted back from the end of the month.
    FromEnd(DayOffset),
}

impl MonthDay {
    fn from_value(value: i32) -> Option<Self> {
        match value {
            1..=31 => Some(MonthDay::Day(value as u32)),
            _ => DayOffset::from_value(value).map(MonthDay::FromEnd),
        }
    }

    pub fn value(self) -> i32 {
        match self {
            MonthDay::Day(day) => day as i32,
            MonthDay::FromEnd(offset) => offset.value(),
        }
    }
}

/// The kind of a rule, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::None => "none",
            RuleKind::Daily => "daily",
            RuleKind::Weekly => "weekly",
            RuleKind::Monthly => "monthly",
            RuleKind::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

impl RecurrenceRule {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, RecurrenceRule::None)
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            RecurrenceRule::None => RuleKind::None,
            RecurrenceRule::Daily { .. } => RuleKind::Daily,
            RecurrenceRule::Weekly { .. } => RuleKind::Weekly,
            RecurrenceRule::Monthly { .. } => RuleKind::Monthly,
            RecurrenceRule::Yearly => RuleKind::Yearly,
        }
    }
}

/// Parses and validates a raw rule string.
pub fn validate_rule(raw: &str) -> Result<RecurrenceRule, RecurrenceError> {
    raw.parse()
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Ok(RecurrenceRule::None);
        }

        let invalid = || RecurrenceError::InvalidRule(raw.to_string());
        let tokens: Vec<&str> = raw.split(' ').collect();

        match tokens.as_slice() {
            ["y"] => Ok(RecurrenceRule::Yearly),
            ["d", interval] => {
                let interval: u32 = interval.parse().map_err(|_| invalid())?;
                if !(1..=MAX_DAILY_INTERVAL).contains(&interval) {
                    return Err(invalid());
                }
                Ok(RecurrenceRule::Daily { interval })
            }
            ["w", weekdays] => {
                let weekdays = parse_list(weekdays, |value| {
                    (1..=7).contains(&value).then_some(value as u32)
                })
                .ok_or_else(invalid)?;
                Ok(RecurrenceRule::Weekly { weekdays })
            }
            ["m", days] => parse_monthly(days, None).ok_or_else(invalid),
            ["m", days, months] => parse_monthly(days, Some(months)).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

fn parse_monthly(days: &str, months: Option<&str>) -> Option<RecurrenceRule> {
    let days = parse_list(days, MonthDay::from_value)?;
    let months = match months {
        Some(months) => parse_list(months, |value| {
            (1..=12).contains(&value).then_some(value as u32)
        })?,
        None => BTreeSet::new(),
    };

    is_satisfiable(&days, &months).then_some(RecurrenceRule::Monthly { days, months })
}

/// Parses a non-empty comma separated list of integers, mapping each value
/// through `accept`. Any malformed or rejected element fails the whole list.
fn parse_list<T, F>(token: &str, accept: F) -> Option<BTreeSet<T>>
where
    T: Ord,
    F: Fn(i32) -> Option<T>,
{
    token
        .split(',')
        .map(|item| item.parse::<i32>().ok().and_then(&accept))
        .collect()
}

/// A monthly rule can fire if any wanted day exists in any wanted month.
/// Offsets from the end always exist; February counts with its leap length.
fn is_satisfiable(days: &BTreeSet<MonthDay>, months: &BTreeSet<u32>) -> bool {
    let longest_wanted_month = if months.is_empty() {
        31
    } else {
        months
            .iter()
            .map(|&month| MonthLength::longest(month).days())
            .max()
            .unwrap_or(31)
    };

    days.iter().any(|day| match day {
        MonthDay::FromEnd(_) => true,
        MonthDay::Day(day) => *day <= longest_wanted_month,
    })
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::None => Ok(()),
            RecurrenceRule::Daily { interval } => write!(f, "d {interval}"),
            RecurrenceRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays.iter().copied())),
            RecurrenceRule::Monthly { days, months } => {
                // Fixed days first in ascending order, then -1 before -2.
                write!(f, "m {}", join(days.iter().map(|day| day.value())))?;
                if !months.is_empty() {
                    write!(f, " {}", join(months.iter().copied()))?;
                }
                Ok(())
            }
            RecurrenceRule::Yearly => f.write_str("y"),
        }
    }
}

fn join<T: fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values.map(|value| value.to_string()).collect::<Vec<_>>().join(",")
}
