use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use scheduler_core::recurrence::month_day::days_in_month;
use scheduler_core::recurrence::{next_occurrence, resolve_initial_date, validate_rule, MonthDay, RecurrenceRule};
use scheduler_core::{format_date, parse_date};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

/// Any date from 1990 to the early 2100s.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..45_000).prop_map(|offset| base() + Days::new(offset))
}

fn join(values: &BTreeSet<i32>) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

fn monthly_rule() -> impl Strategy<Value = RecurrenceRule> {
    let day = prop_oneof![1i32..=31, Just(-1), Just(-2)];
    (
        prop::collection::btree_set(day, 1..4),
        prop::collection::btree_set(1i32..=12, 0..4),
    )
        .prop_filter_map("unsatisfiable monthly rule", |(days, months)| {
            let raw = if months.is_empty() {
                format!("m {}", join(&days))
            } else {
                format!("m {} {}", join(&days), join(&months))
            };
            validate_rule(&raw).ok()
        })
}

fn matches_monthly(date: NaiveDate, days: &BTreeSet<MonthDay>, months: &BTreeSet<u32>) -> bool {
    if !months.is_empty() && !months.contains(&date.month()) {
        return false;
    }
    let last = days_in_month(date.year(), date.month());
    days.iter().any(|day| match day.value() {
        -1 => date.day() == last,
        -2 => date.day() == last - 1,
        d => date.day() == d as u32,
    })
}

/// Day-by-day search for the first matching date after `start`.
fn brute_force_monthly(start: NaiveDate, days: &BTreeSet<MonthDay>, months: &BTreeSet<u32>) -> Option<NaiveDate> {
    (1..=366 * 9)
        .map(|offset| start + Days::new(offset))
        .find(|date| matches_monthly(*date, days, months))
}

proptest! {
    #[test]
    fn daily_lands_on_the_anchor_grid(today in any_date(), anchor in any_date(), interval in 1u32..=400) {
        let rule = RecurrenceRule::Daily { interval };
        let next = next_occurrence(today, anchor, &rule).unwrap();
        let start = anchor.max(today);

        prop_assert!(next > start);
        prop_assert_eq!((next - anchor).num_days() % i64::from(interval), 0);
        // One interval earlier is no longer after the start.
        prop_assert!(next - Days::new(u64::from(interval)) <= start);
    }

    #[test]
    fn weekly_is_the_first_wanted_weekday(
        today in any_date(),
        anchor in any_date(),
        weekdays in prop::collection::btree_set(1u32..=7, 1..=7),
    ) {
        let rule = RecurrenceRule::Weekly { weekdays: weekdays.clone() };
        let next = next_occurrence(today, anchor, &rule).unwrap();
        let start = anchor.max(today);

        prop_assert!(next > start);
        prop_assert!((next - start).num_days() <= 7);
        prop_assert!(weekdays.contains(&next.weekday().number_from_monday()));
        let mut day = start + Days::new(1);
        while day < next {
            prop_assert!(!weekdays.contains(&day.weekday().number_from_monday()));
            day = day + Days::new(1);
        }
    }

    #[test]
    fn monthly_matches_brute_force(today in any_date(), anchor in any_date(), rule in monthly_rule()) {
        let RecurrenceRule::Monthly { days, months } = &rule else {
            unreachable!("strategy only yields monthly rules");
        };
        let next = next_occurrence(today, anchor, &rule).unwrap();
        let expected = brute_force_monthly(anchor.max(today), days, months);
        prop_assert_eq!(Some(next), expected, "rule {}", rule);
    }

    #[test]
    fn yearly_keeps_month_and_day(today in any_date(), anchor in any_date()) {
        let next = next_occurrence(today, anchor, &RecurrenceRule::Yearly).unwrap();

        prop_assert!(next > anchor.max(today));
        prop_assert_eq!(next.month(), anchor.month());
        if anchor.month() == 2 && anchor.day() == 29 {
            prop_assert!(next.day() == 29 || next.day() == 28);
        } else {
            prop_assert_eq!(next.day(), anchor.day());
        }
    }

    #[test]
    fn future_dates_are_kept(today in any_date(), ahead in 0u64..2_000, raw in prop_oneof![
        Just(""), Just("d 1"), Just("d 30"), Just("w 2,4"), Just("m 1,-1"), Just("m 29 2"), Just("y"),
    ]) {
        let requested = today + Days::new(ahead);
        let resolved = resolve_initial_date(Some(&format_date(requested)), raw, today).unwrap();
        prop_assert_eq!(resolved, requested);
    }

    #[test]
    fn past_dates_resolve_to_today_or_later(today in any_date(), behind in 1u64..2_000, raw in prop_oneof![
        Just(""), Just("d 1"), Just("d 30"), Just("w 2,4"), Just("m 1,-1"), Just("m 29 2"), Just("y"),
    ]) {
        let requested = today - Days::new(behind);
        let resolved = resolve_initial_date(Some(&format_date(requested)), raw, today).unwrap();
        if raw.is_empty() {
            prop_assert_eq!(resolved, today);
        } else {
            prop_assert!(resolved > today);
        }
    }

    #[test]
    fn wire_date_round_trips(date in any_date()) {
        let text = format_date(date);
        prop_assert_eq!(text.len(), 8);
        prop_assert_eq!(parse_date(&text).unwrap(), date);
    }

    #[test]
    fn rule_display_is_reparsable(rule in monthly_rule()) {
        prop_assert_eq!(validate_rule(&rule.to_string()).unwrap(), rule);
    }
}
