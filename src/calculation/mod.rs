//! Calculation logic for the leave summary service.
//!
//! This module contains the pure functions of the service: the aggregation
//! of time entries into a leave summary and the month-end date that keys
//! the written-back record.

mod aggregation;
mod month_end;

pub use aggregation::aggregate;
pub use month_end::end_of_month;
