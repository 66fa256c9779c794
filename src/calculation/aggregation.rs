//! Leave aggregation functionality.
//!
//! This module folds time entries into a [`LeaveSummary`]. Each
//! (entry, calendar day) pair is classified by the entry's time type and,
//! for sick leave, additionally by the day's reporting category.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{CalendarDay, LeaveCategory, LeaveSummary, TimeEntry};

/// Aggregates time entries into categorized day counts.
///
/// For every calendar day of every entry, the day's quantity (1 when
/// absent) is added to:
///
/// - `vacation_days` for time type `"300"`;
/// - `sick_leave_days` for `"100"`, `"110"`, `"120"` and `"150"`, plus the
///   bucket matching the day's reporting category, if it has one;
/// - `leave_days` for every other code except `"flex"`;
/// - nothing for `"flex"`.
///
/// The result does not depend on the order of entries or of calendar days
/// within an entry. Entries with no calendar days contribute nothing.
/// A counter that would overflow stays at [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use leave_summary::calculation::aggregate;
/// use leave_summary::models::{CalendarDay, ReportingCategory, TimeEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     TimeEntry::new("300", vec![CalendarDay::with_quantity(Decimal::from(2))]),
///     TimeEntry::new(
///         "100",
///         vec![CalendarDay::default().categorized(ReportingCategory::ShortUpTo3Days)],
///     ),
/// ];
///
/// let summary = aggregate(&entries);
/// assert_eq!(summary.vacation_days, Decimal::from(2));
/// assert_eq!(summary.sick_leave_days, Decimal::ONE);
/// assert_eq!(summary.sick_leave_short_le_3d, Decimal::ONE);
/// ```
pub fn aggregate(entries: &[TimeEntry]) -> LeaveSummary {
    entries.iter().fold(LeaveSummary::new(), |mut summary, entry| {
        let category = entry.time_type.category();
        for day in &entry.time_calendar {
            add_day(&mut summary, category, day);
        }
        summary
    })
}

fn add_day(summary: &mut LeaveSummary, category: LeaveCategory, day: &CalendarDay) {
    let days = day.days();
    match category {
        LeaveCategory::Vacation => accumulate(&mut summary.vacation_days, days),
        LeaveCategory::SickLeave => {
            accumulate(&mut summary.sick_leave_days, days);
            if let Some(bucket) = day
                .reporting_category
                .as_ref()
                .and_then(|c| summary.bucket_mut(c))
            {
                accumulate(bucket, days);
            }
        }
        LeaveCategory::Leave => accumulate(&mut summary.leave_days, days),
        LeaveCategory::Excluded => {}
    }
}

fn accumulate(counter: &mut Decimal, days: Decimal) {
    *counter = counter.checked_add(days).unwrap_or_else(|| {
        warn!(counter = %counter, days = %days, "Day count overflowed, saturating");
        Decimal::MAX
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportingCategory;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn day(quantity: i64) -> CalendarDay {
        CalendarDay::with_quantity(dec(quantity))
    }

    fn sick_day(quantity: i64, tag: &str) -> CalendarDay {
        day(quantity).categorized(ReportingCategory::from_tag(tag))
    }

    /// Scenario 1: vacation entry
    #[test]
    fn test_vacation_entry_counts_vacation_days_only() {
        let summary = aggregate(&[TimeEntry::new("300", vec![day(2)])]);

        assert_eq!(
            summary,
            LeaveSummary {
                vacation_days: dec(2),
                ..LeaveSummary::default()
            }
        );
    }

    /// Scenario 2: sick leave split over two buckets
    #[test]
    fn test_sick_leave_entry_fills_total_and_buckets() {
        let summary = aggregate(&[TimeEntry::new(
            "100",
            vec![sick_day(1, "SHORT_LE_3D"), sick_day(4, "LONG_GT_8W")],
        )]);

        assert_eq!(
            summary,
            LeaveSummary {
                sick_leave_days: dec(5),
                sick_leave_short_le_3d: dec(1),
                sick_leave_long_gt_8w: dec(4),
                ..LeaveSummary::default()
            }
        );
    }

    /// Scenario 3: absent quantity on other leave
    #[test]
    fn test_other_leave_with_absent_quantity_counts_one_day() {
        let summary = aggregate(&[TimeEntry::new("200", vec![CalendarDay::default()])]);

        assert_eq!(
            summary,
            LeaveSummary {
                leave_days: dec(1),
                ..LeaveSummary::default()
            }
        );
    }

    /// Scenario 4: flextime
    #[test]
    fn test_flex_entry_counts_nothing() {
        let summary = aggregate(&[TimeEntry::new("flex", vec![day(5)])]);
        assert!(summary.is_empty());
    }

    /// Scenario 5: no entries
    #[test]
    fn test_empty_input_gives_zero_summary() {
        assert_eq!(aggregate(&[]), LeaveSummary::default());
    }

    /// Scenario 6: unknown reporting category
    #[test]
    fn test_unknown_reporting_category_counts_total_only() {
        let summary = aggregate(&[TimeEntry::new("150", vec![sick_day(3, "UNKNOWN_TAG")])]);

        assert_eq!(
            summary,
            LeaveSummary {
                sick_leave_days: dec(3),
                ..LeaveSummary::default()
            }
        );
        assert_eq!(summary.bucketed_sick_leave_days(), Decimal::ZERO);
    }

    #[test]
    fn test_every_bucket_is_reachable() {
        let summary = aggregate(&[TimeEntry::new(
            "120",
            vec![
                sick_day(1, "SHORT_LE_3D"),
                sick_day(2, "SHORT_GT_3D"),
                sick_day(3, "LONG_LT_8W"),
                sick_day(4, "LONG_GT_8W"),
            ],
        )]);

        assert_eq!(summary.sick_leave_days, dec(10));
        assert_eq!(summary.sick_leave_short_le_3d, dec(1));
        assert_eq!(summary.sick_leave_short_gt_3d, dec(2));
        assert_eq!(summary.sick_leave_long_lt_8w, dec(3));
        assert_eq!(summary.sick_leave_long_gt_8w, dec(4));
    }

    #[test]
    fn test_sick_day_without_reporting_category_counts_total_only() {
        let summary = aggregate(&[TimeEntry::new("110", vec![day(2)])]);

        assert_eq!(summary.sick_leave_days, dec(2));
        assert_eq!(summary.bucketed_sick_leave_days(), Decimal::ZERO);
    }

    #[test]
    fn test_reporting_category_ignored_outside_sick_leave() {
        let summary = aggregate(&[
            TimeEntry::new("300", vec![sick_day(1, "SHORT_LE_3D")]),
            TimeEntry::new("200", vec![sick_day(2, "LONG_GT_8W")]),
        ]);

        assert_eq!(summary.vacation_days, dec(1));
        assert_eq!(summary.leave_days, dec(2));
        assert_eq!(summary.sick_leave_days, Decimal::ZERO);
        assert_eq!(summary.bucketed_sick_leave_days(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_quantity_contributes_zero() {
        let summary = aggregate(&[TimeEntry::new("300", vec![day(0)])]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_fractional_quantities_are_summed_exactly() {
        let summary = aggregate(&[TimeEntry::new(
            "300",
            vec![
                CalendarDay::with_quantity(Decimal::new(5, 1)),
                CalendarDay::with_quantity(Decimal::new(25, 2)),
                CalendarDay::with_quantity(Decimal::new(25, 2)),
            ],
        )]);

        assert_eq!(summary.vacation_days, Decimal::ONE);
    }

    #[test]
    fn test_entry_without_calendar_days_contributes_nothing() {
        let summary = aggregate(&[
            TimeEntry::new("300", vec![]),
            TimeEntry::new("100", vec![]),
            TimeEntry::new("200", vec![]),
        ]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_mixed_entries() {
        let summary = aggregate(&[
            TimeEntry::new("300", vec![day(1), CalendarDay::default()]),
            TimeEntry::new("150", vec![sick_day(2, "SHORT_GT_3D")]),
            TimeEntry::new("flex", vec![day(8)]),
            TimeEntry::new("410", vec![day(3)]),
        ]);

        assert_eq!(
            summary,
            LeaveSummary {
                vacation_days: dec(2),
                sick_leave_days: dec(2),
                leave_days: dec(3),
                sick_leave_short_gt_3d: dec(2),
                ..LeaveSummary::default()
            }
        );
    }

    #[test]
    fn test_overflowing_quantities_saturate() {
        let huge: Decimal = "50000000000000000000000000000".parse().unwrap();
        let summary = aggregate(&[
            TimeEntry::new(
                "300",
                vec![
                    CalendarDay::with_quantity(huge),
                    CalendarDay::with_quantity(huge),
                ],
            ),
            TimeEntry::new(
                "120",
                vec![
                    CalendarDay::with_quantity(huge).categorized(ReportingCategory::LongOver8Weeks),
                    CalendarDay::with_quantity(huge).categorized(ReportingCategory::LongOver8Weeks),
                ],
            ),
        ]);

        assert_eq!(summary.vacation_days, Decimal::MAX);
        assert_eq!(summary.sick_leave_days, Decimal::MAX);
        assert_eq!(summary.sick_leave_long_gt_8w, Decimal::MAX);
        assert_eq!(summary.leave_days, Decimal::ZERO);
    }

    fn arb_code() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("300".to_string()),
            Just("100".to_string()),
            Just("110".to_string()),
            Just("120".to_string()),
            Just("150".to_string()),
            Just("flex".to_string()),
            "[0-9a-z]{0,4}",
        ]
    }

    fn arb_day() -> impl Strategy<Value = CalendarDay> {
        let quantity = prop::option::of((0i64..1000, 0u32..3).prop_map(|(n, s)| Decimal::new(n, s)));
        let category = prop::option::of(prop_oneof![
            Just("SHORT_LE_3D".to_string()),
            Just("SHORT_GT_3D".to_string()),
            Just("LONG_LT_8W".to_string()),
            Just("LONG_GT_8W".to_string()),
            "[A-Z_]{0,8}",
        ]);
        (quantity, category).prop_map(|(quantity, category)| CalendarDay {
            quantity,
            reporting_category: category.map(|tag| ReportingCategory::from_tag(&tag)),
        })
    }

    fn arb_entry() -> impl Strategy<Value = TimeEntry> {
        (arb_code(), prop::collection::vec(arb_day(), 0..6))
            .prop_map(|(code, days)| TimeEntry::new(&code, days))
    }

    fn arb_entries() -> impl Strategy<Value = Vec<TimeEntry>> {
        prop::collection::vec(arb_entry(), 0..12)
    }

    proptest! {
        #[test]
        fn prop_entry_order_does_not_matter(entries in arb_entries()) {
            let mut reversed = entries.clone();
            reversed.reverse();
            prop_assert_eq!(aggregate(&entries), aggregate(&reversed));
        }

        #[test]
        fn prop_calendar_day_order_does_not_matter(entries in arb_entries()) {
            let shuffled: Vec<TimeEntry> = entries
                .iter()
                .cloned()
                .map(|mut e| {
                    e.time_calendar.reverse();
                    e
                })
                .collect();
            prop_assert_eq!(aggregate(&entries), aggregate(&shuffled));
        }

        #[test]
        fn prop_aggregation_is_idempotent(entries in arb_entries()) {
            prop_assert_eq!(aggregate(&entries), aggregate(&entries));
        }

        #[test]
        fn prop_split_input_merges_to_whole(entries in arb_entries(), split in 0usize..12) {
            let split = split.min(entries.len());
            let (left, right) = entries.split_at(split);
            prop_assert_eq!(aggregate(&entries), aggregate(left).merge(&aggregate(right)));
        }

        #[test]
        fn prop_buckets_never_exceed_sick_leave_total(entries in arb_entries()) {
            let summary = aggregate(&entries);
            prop_assert!(summary.bucketed_sick_leave_days() <= summary.sick_leave_days);
        }

        #[test]
        fn prop_counters_are_never_negative(entries in arb_entries()) {
            let summary = aggregate(&entries);
            prop_assert!(summary.vacation_days >= Decimal::ZERO);
            prop_assert!(summary.sick_leave_days >= Decimal::ZERO);
            prop_assert!(summary.leave_days >= Decimal::ZERO);
            prop_assert!(summary.sick_leave_short_le_3d >= Decimal::ZERO);
            prop_assert!(summary.sick_leave_short_gt_3d >= Decimal::ZERO);
            prop_assert!(summary.sick_leave_long_lt_8w >= Decimal::ZERO);
            prop_assert!(summary.sick_leave_long_gt_8w >= Decimal::ZERO);
        }

        #[test]
        fn prop_flex_entries_change_nothing(
            entries in arb_entries(),
            flex_days in prop::collection::vec(arb_day(), 0..6),
        ) {
            let mut with_flex = entries.clone();
            with_flex.push(TimeEntry::new("flex", flex_days));
            prop_assert_eq!(aggregate(&entries), aggregate(&with_flex));
        }

        #[test]
        fn prop_vacation_adds_exact_sum(days in prop::collection::vec(arb_day(), 0..6)) {
            let expected: Decimal = days.iter().map(CalendarDay::days).sum();
            let summary = aggregate(&[TimeEntry::new("300", days)]);
            prop_assert_eq!(summary.vacation_days, expected);
            prop_assert_eq!(summary.sick_leave_days, Decimal::ZERO);
            prop_assert_eq!(summary.leave_days, Decimal::ZERO);
        }

        #[test]
        fn prop_other_codes_add_to_leave_days(
            code in "[2-9][0-9]{2}",
            days in prop::collection::vec(arb_day(), 0..6),
        ) {
            prop_assume!(code != "300");
            let expected: Decimal = days.iter().map(CalendarDay::days).sum();
            let summary = aggregate(&[TimeEntry::new(&code, days)]);
            prop_assert_eq!(summary.leave_days, expected);
            prop_assert_eq!(summary.vacation_days, Decimal::ZERO);
        }
    }
}
