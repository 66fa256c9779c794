//! Core data models for the leave summary service.
//!
//! This module contains the domain types shared by the aggregation, the
//! backend client and the HTTP API.

mod planned_working_time;
mod summary;
mod time_entry;

pub use planned_working_time::{PlannedWorkingTimeBody, PlannedWorkingTimeUpdate};
pub use summary::LeaveSummary;
pub use time_entry::{
    CalendarDay, DEFAULT_DAY_QUANTITY, FLEX_CODE, LeaveCategory, ReportingCategory,
    SICK_LEAVE_CODES, TimeEntry, TimeType, VACATION_CODE,
};
