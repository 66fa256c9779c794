//! Leave summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReportingCategory;

/// Categorized day counts for one employee and date range.
///
/// Every counter starts at zero and is only ever added to.
/// `sick_leave_days` is the total of all sick leave, so the four bucket
/// counters together never exceed it. Serialized with camelCase names and
/// plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    /// Vacation days.
    #[serde(with = "rust_decimal::serde::float")]
    pub vacation_days: Decimal,
    /// All sick leave days, bucketed or not.
    #[serde(with = "rust_decimal::serde::float")]
    pub sick_leave_days: Decimal,
    /// Days of any other leave type (flextime excluded).
    #[serde(with = "rust_decimal::serde::float")]
    pub leave_days: Decimal,
    /// Sick leave days reported as short, at most three days.
    #[serde(rename = "sickLeaveShortLE3d", with = "rust_decimal::serde::float")]
    pub sick_leave_short_le_3d: Decimal,
    /// Sick leave days reported as short, more than three days.
    #[serde(rename = "sickLeaveShortGT3d", with = "rust_decimal::serde::float")]
    pub sick_leave_short_gt_3d: Decimal,
    /// Sick leave days reported as long, under eight weeks.
    #[serde(rename = "sickLeaveLongLT8w", with = "rust_decimal::serde::float")]
    pub sick_leave_long_lt_8w: Decimal,
    /// Sick leave days reported as long, over eight weeks.
    #[serde(rename = "sickLeaveLongGT8w", with = "rust_decimal::serde::float")]
    pub sick_leave_long_gt_8w: Decimal,
}

impl LeaveSummary {
    /// Returns an all-zero summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket counter for a reporting category, if it has one.
    pub fn bucket_mut(&mut self, category: &ReportingCategory) -> Option<&mut Decimal> {
        match category {
            ReportingCategory::ShortUpTo3Days => Some(&mut self.sick_leave_short_le_3d),
            ReportingCategory::ShortOver3Days => Some(&mut self.sick_leave_short_gt_3d),
            ReportingCategory::LongUnder8Weeks => Some(&mut self.sick_leave_long_lt_8w),
            ReportingCategory::LongOver8Weeks => Some(&mut self.sick_leave_long_gt_8w),
            ReportingCategory::Unrecognized(_) => None,
        }
    }

    /// Sum of the four sick leave buckets, saturating at [`Decimal::MAX`].
    pub fn bucketed_sick_leave_days(&self) -> Decimal {
        self.sick_leave_short_le_3d
            .saturating_add(self.sick_leave_short_gt_3d)
            .saturating_add(self.sick_leave_long_lt_8w)
            .saturating_add(self.sick_leave_long_gt_8w)
    }

    /// Adds every counter of `other` to this summary, saturating at
    /// [`Decimal::MAX`].
    pub fn merge(self, other: &LeaveSummary) -> Self {
        Self {
            vacation_days: self.vacation_days.saturating_add(other.vacation_days),
            sick_leave_days: self.sick_leave_days.saturating_add(other.sick_leave_days),
            leave_days: self.leave_days.saturating_add(other.leave_days),
            sick_leave_short_le_3d: self
                .sick_leave_short_le_3d
                .saturating_add(other.sick_leave_short_le_3d),
            sick_leave_short_gt_3d: self
                .sick_leave_short_gt_3d
                .saturating_add(other.sick_leave_short_gt_3d),
            sick_leave_long_lt_8w: self
                .sick_leave_long_lt_8w
                .saturating_add(other.sick_leave_long_lt_8w),
            sick_leave_long_gt_8w: self
                .sick_leave_long_gt_8w
                .saturating_add(other.sick_leave_long_gt_8w),
        }
    }

    /// Returns true when no counter has been incremented.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
