//! Resolution of "from the end of the month" day offsets.
//!
//! A monthly rule may ask for the last (`-1`) or second-to-last (`-2`) day of
//! a month. Which concrete day that is depends on the month length, and for
//! February on the leap-year rule, so every lookup goes through the
//! [`MonthLength`] of a concrete year and month.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// A day counted back from the end of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOffset {
    /// `-1`
    Last,
    /// `-2`
    SecondToLast,
}

impl DayOffset {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            -1 => Some(DayOffset::Last),
            -2 => Some(DayOffset::SecondToLast),
            _ => None,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            DayOffset::Last => -1,
            DayOffset::SecondToLast => -2,
        }
    }
}

/// The four possible month lengths of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthLength {
    Days28,
    Days29,
    Days30,
    Days31,
}

impl MonthLength {
    /// Length of `month` (1..=12) in `year`.
    pub fn of(year: i32, month: u32) -> Self {
        match month {
            2 if is_leap_year(year) => MonthLength::Days29,
            2 => MonthLength::Days28,
            4 | 6 | 9 | 11 => MonthLength::Days30,
            _ => MonthLength::Days31,
        }
    }

    /// Length of `month` in a leap year, i.e. the most days it can ever have.
    pub fn longest(month: u32) -> Self {
        Self::of(2000, month)
    }

    pub fn days(self) -> u32 {
        match self {
            MonthLength::Days28 => 28,
            MonthLength::Days29 => 29,
            MonthLength::Days30 => 30,
            MonthLength::Days31 => 31,
        }
    }
}

/// Whether the reference month still contains the offset day after a given
/// day-of-month, or the search has to move on to the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthShift {
    Current,
    Next,
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[inline]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    MonthLength::of(year, month).days()
}

/// The month following `(year, month)`, rolling December into January.
#[inline]
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Concrete day-of-month of `offset` for a month of the given length.
pub fn offset_day(length: MonthLength, offset: DayOffset) -> u32 {
    match (length, offset) {
        (MonthLength::Days28, DayOffset::Last) => 28,
        (MonthLength::Days28, DayOffset::SecondToLast) => 27,
        (MonthLength::Days29, DayOffset::Last) => 29,
        (MonthLength::Days29, DayOffset::SecondToLast) => 28,
        (MonthLength::Days30, DayOffset::Last) => 30,
        (MonthLength::Days30, DayOffset::SecondToLast) => 29,
        (MonthLength::Days31, DayOffset::Last) => 31,
        (MonthLength::Days31, DayOffset::SecondToLast) => 30,
    }
}

/// Concrete day-of-month of `offset` in `month` of `year`.
#[inline]
pub fn concrete_day(year: i32, month: u32, offset: DayOffset) -> u32 {
    offset_day(MonthLength::of(year, month), offset)
}

/// Decides whether the offset day is still strictly ahead of `day_of_month`
/// in a month of the given length.
pub fn month_shift(length: MonthLength, day_of_month: u32, offset: DayOffset) -> MonthShift {
    if day_of_month < offset_day(length, offset) {
        MonthShift::Current
    } else {
        MonthShift::Next
    }
}

/// Finds the next date strictly after `max(anchor, today)` that is the
/// `offset` day of a wanted month. An empty `months` set means every month.
///
/// Returns `None` only when `months` holds no valid month number.
pub fn resolve(
    anchor: NaiveDate,
    today: NaiveDate,
    months: &BTreeSet<u32>,
    offset: DayOffset,
) -> Option<NaiveDate> {
    let reference = anchor.max(today);
    let (mut year, mut month) = (reference.year(), reference.month());

    if month_shift(MonthLength::of(year, month), reference.day(), offset) == MonthShift::Next {
        (year, month) = next_month(year, month);
    }

    // Any wanted month is reached within a year of the reference month.
    for _ in 0..=12 {
        if months.is_empty() || months.contains(&month) {
            return NaiveDate::from_ymd_opt(year, month, concrete_day(year, month, offset));
        }
        (year, month) = next_month(year, month);
    }

    None
}
