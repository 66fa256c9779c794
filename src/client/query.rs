//! OData query construction for employee time lookups.

use chrono::NaiveDate;

/// Identifies the time entries to summarize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryQuery {
    /// The employee whose entries are fetched.
    pub user_id: String,
    /// First day of the range, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the range, inclusive.
    pub end_date: NaiveDate,
}

impl TimeEntryQuery {
    /// Creates a query for the given employee and inclusive date range.
    pub fn new(user_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            start_date,
            end_date,
        }
    }

    /// `$filter` selecting the employee's entries that overlap the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_summary::client::TimeEntryQuery;
    /// use chrono::NaiveDate;
    ///
    /// let query = TimeEntryQuery::new(
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    /// );
    /// assert_eq!(
    ///     query.filter(),
    ///     "userId eq 'emp_001' and startDate le 2025-01-31 and endDate ge 2025-01-01"
    /// );
    /// ```
    pub fn filter(&self) -> String {
        format!(
            "userId eq '{}' and startDate le {} and endDate ge {}",
            escape_literal(&self.user_id),
            self.end_date,
            self.start_date
        )
    }

    /// `$expand` pulling in the calendar days that fall inside the range.
    pub fn expand(&self) -> String {
        format!(
            "timeCalendar($filter=date ge {} and date le {})",
            self.start_date, self.end_date
        )
    }

    /// All query parameters of the time entry request.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("$format", "json".to_string()),
            ("$filter", self.filter()),
            ("$expand", self.expand()),
        ]
    }
}

/// Escapes a value for use inside a single-quoted OData string literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
