use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::date::format_date;
use crate::error::RecurrenceError;
use crate::recurrence::month_day::{self, DayOffset};
use crate::recurrence::rule::{MonthDay, RecurrenceRule};

/// Upper bound of the month-by-month search of a monthly rule. The longest
/// gap between two occurrences is a February 29th across a century year
/// that is not a leap year (eight years).
const MAX_MONTHS_SEARCHED: usize = 12 * 9;

/// Computes the next occurrence of `rule` for a task anchored at `anchor`.
///
/// The result is the earliest date that satisfies the rule and lies strictly
/// after both `anchor` and `today`:
///
/// - **Daily**: `anchor + k * interval` for the smallest `k >= 1` past today.
/// - **Weekly**: the first wanted weekday after `max(anchor, today)`.
/// - **Monthly**: the first wanted day of a wanted month after
///   `max(anchor, today)`; `-1`/`-2` are resolved per month.
/// - **Yearly**: `anchor + k years` for the smallest `k >= 1` past today.
///   A February 29th anchor lands on February 28th in common years.
///
/// # Errors
/// - `InvalidRule` for [`RecurrenceRule::None`], which has no next occurrence.
/// - `NoOccurrence` if the search bound is exhausted.
/// - `PastResult` if a computed date is not after today.
pub fn next_occurrence(
    today: NaiveDate,
    anchor: NaiveDate,
    rule: &RecurrenceRule,
) -> Result<NaiveDate, RecurrenceError> {
    let next = match rule {
        RecurrenceRule::None => return Err(RecurrenceError::InvalidRule(String::new())),
        RecurrenceRule::Daily { interval } => next_daily(today, anchor, *interval),
        RecurrenceRule::Weekly { weekdays } => next_weekly(today, anchor, weekdays),
        RecurrenceRule::Monthly { days, months } => next_monthly(today, anchor, days, months),
        RecurrenceRule::Yearly => next_yearly(today, anchor),
    }
    .ok_or_else(|| RecurrenceError::NoOccurrence(rule.to_string()))?;

    if next <= today {
        return Err(RecurrenceError::PastResult {
            found: format_date(next),
            today: format_date(today),
        });
    }

    Ok(next)
}

fn next_daily(today: NaiveDate, anchor: NaiveDate, interval: u32) -> Option<NaiveDate> {
    let interval = u64::from(interval);
    let steps = if anchor >= today {
        1
    } else {
        let behind = (today - anchor).num_days() as u64;
        behind / interval + 1
    };
    anchor.checked_add_days(Days::new(steps * interval))
}

fn next_weekly(today: NaiveDate, anchor: NaiveDate, weekdays: &BTreeSet<u32>) -> Option<NaiveDate> {
    let start = anchor.max(today);
    (1..=7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .find(|date| weekdays.contains(&date.weekday().number_from_monday()))
}

fn next_monthly(
    today: NaiveDate,
    anchor: NaiveDate,
    days: &BTreeSet<MonthDay>,
    months: &BTreeSet<u32>,
) -> Option<NaiveDate> {
    days.iter()
        .filter_map(|day| match *day {
            MonthDay::Day(day) => next_fixed_day(today, anchor, day, months),
            MonthDay::FromEnd(offset) => next_offset_day(today, anchor, offset, months),
        })
        .min()
}

fn next_fixed_day(
    today: NaiveDate,
    anchor: NaiveDate,
    day: u32,
    months: &BTreeSet<u32>,
) -> Option<NaiveDate> {
    let reference = anchor.max(today);
    let (mut year, mut month) = (reference.year(), reference.month());

    for _ in 0..MAX_MONTHS_SEARCHED {
        if months.is_empty() || months.contains(&month) {
            // Months without the wanted day (the 31st of April) are skipped.
            if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
                if candidate > reference {
                    return Some(candidate);
                }
            }
        }
        (year, month) = month_day::next_month(year, month);
    }

    None
}

fn next_offset_day(
    today: NaiveDate,
    anchor: NaiveDate,
    offset: DayOffset,
    months: &BTreeSet<u32>,
) -> Option<NaiveDate> {
    month_day::resolve(anchor, today, months, offset)
}

fn next_yearly(today: NaiveDate, anchor: NaiveDate) -> Option<NaiveDate> {
    let reference = anchor.max(today);
    let first = (reference.year() - anchor.year()).max(1) as u32;

    // Years are always added to the original anchor so a clamped
    // February 28th returns to the 29th in the next leap year.
    (first..first + 3)
        .filter_map(|years| anchor.checked_add_months(Months::new(12 * years)))
        .find(|candidate| *candidate > reference)
}
