//! Planned working time record written back to the HR backend.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveSummary;

/// Update of one planned working time record.
///
/// The record is keyed by employee and the last day of the summarized month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWorkingTimeUpdate {
    /// The employee the record belongs to.
    pub user_id: String,
    /// The month-end date the record is keyed by.
    pub start_date: NaiveDate,
    /// The values to write.
    pub summary: LeaveSummary,
}

impl PlannedWorkingTimeUpdate {
    /// Creates an update for the given key and summary.
    pub fn new(user_id: impl Into<String>, start_date: NaiveDate, summary: LeaveSummary) -> Self {
        Self {
            user_id: user_id.into(),
            start_date,
            summary,
        }
    }

    /// Returns the request body with the backend's custom property names.
    pub fn body(&self) -> PlannedWorkingTimeBody {
        PlannedWorkingTimeBody::from(&self.summary)
    }
}

/// Body of a planned working time update, one `cust_` property per counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedWorkingTimeBody {
    /// Vacation days.
    #[serde(rename = "cust_vacationDays", with = "rust_decimal::serde::float")]
    pub vacation_days: Decimal,
    /// All sick leave days.
    #[serde(rename = "cust_sickLeaveDays", with = "rust_decimal::serde::float")]
    pub sick_leave_days: Decimal,
    /// Other leave days.
    #[serde(rename = "cust_leaveDays", with = "rust_decimal::serde::float")]
    pub leave_days: Decimal,
    /// Short sick leave, at most three days.
    #[serde(rename = "cust_sickLeaveShortLE3d", with = "rust_decimal::serde::float")]
    pub sick_leave_short_le_3d: Decimal,
    /// Short sick leave, more than three days.
    #[serde(rename = "cust_sickLeaveShortGT3d", with = "rust_decimal::serde::float")]
    pub sick_leave_short_gt_3d: Decimal,
    /// Long sick leave, under eight weeks.
    #[serde(rename = "cust_sickLeaveLongLT8w", with = "rust_decimal::serde::float")]
    pub sick_leave_long_lt_8w: Decimal,
    /// Long sick leave, over eight weeks.
    #[serde(rename = "cust_sickLeaveLongGT8w", with = "rust_decimal::serde::float")]
    pub sick_leave_long_gt_8w: Decimal,
}

impl From<&LeaveSummary> for PlannedWorkingTimeBody {
    fn from(summary: &LeaveSummary) -> Self {
        Self {
            vacation_days: summary.vacation_days,
            sick_leave_days: summary.sick_leave_days,
            leave_days: summary.leave_days,
            sick_leave_short_le_3d: summary.sick_leave_short_le_3d,
            sick_leave_short_gt_3d: summary.sick_leave_short_gt_3d,
            sick_leave_long_lt_8w: summary.sick_leave_long_lt_8w,
            sick_leave_long_gt_8w: summary.sick_leave_long_gt_8w,
        }
    }
}
