//! Request types for the leave summary API.
//!
//! This module defines the JSON request structure for the `/summary`
//! endpoint and its validation into a [`TimeEntryQuery`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::TimeEntryQuery;
use crate::error::{ServiceError, ServiceResult};

/// Date format accepted for `reqStartDate` and `reqEndDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for the `/summary` endpoint.
///
/// Every field is optional at the parsing stage so that missing values are
/// reported together as a single client error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The employee identifier.
    #[serde(default)]
    pub user_id: Option<String>,
    /// First day of the range (`YYYY-MM-DD`).
    #[serde(default)]
    pub req_start_date: Option<String>,
    /// Last day of the range (`YYYY-MM-DD`). Also selects the month whose
    /// planned working time record is updated.
    #[serde(default)]
    pub req_end_date: Option<String>,
}

impl SummaryRequest {
    /// Checks that all parameters are present and converts them to a query.
    ///
    /// Empty or whitespace-only values count as missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_summary::api::SummaryRequest;
    ///
    /// let request = SummaryRequest {
    ///     user_id: Some("emp_001".to_string()),
    ///     req_start_date: Some("2025-01-01".to_string()),
    ///     req_end_date: Some("2025-01-31".to_string()),
    /// };
    /// let query = request.validate().unwrap();
    /// assert_eq!(query.user_id, "emp_001");
    /// ```
    pub fn validate(self) -> ServiceResult<TimeEntryQuery> {
        let user_id = present(self.user_id);
        let start = present(self.req_start_date);
        let end = present(self.req_end_date);

        let (user_id, start, end) = match (user_id, start, end) {
            (Some(user_id), Some(start), Some(end)) => (user_id, start, end),
            (user_id, start, end) => {
                let fields = [
                    ("userId", user_id.is_none()),
                    ("reqStartDate", start.is_none()),
                    ("reqEndDate", end.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name.to_string())
                .collect();
                return Err(ServiceError::MissingParameters { fields });
            }
        };

        let start_date = parse_date("reqStartDate", &start)?;
        let end_date = parse_date("reqEndDate", &end)?;
        if start_date > end_date {
            return Err(ServiceError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(TimeEntryQuery::new(user_id, start_date, end_date))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_date(field: &str, value: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ServiceError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
