//! Time entry model and related types.
//!
//! This module defines the `TimeEntry` and `CalendarDay` structs together
//! with the closed sets of time type codes and reporting categories used
//! to classify them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantity assumed for a calendar day that carries no quantity of its own.
pub const DEFAULT_DAY_QUANTITY: Decimal = Decimal::ONE;

/// Time type code for vacation.
pub const VACATION_CODE: &str = "300";

/// Time type codes counted as sick leave.
pub const SICK_LEAVE_CODES: [&str; 4] = ["100", "110", "120", "150"];

/// Time type code for flextime, which never counts as leave.
pub const FLEX_CODE: &str = "flex";

/// The time type of a time entry.
///
/// Codes are matched by exact string equality; `"0300"` is not vacation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeType {
    /// Vacation (`"300"`).
    Vacation,
    /// One of the sick leave codes (`"100"`, `"110"`, `"120"`, `"150"`).
    SickLeave(String),
    /// Flextime (`"flex"`).
    Flex,
    /// Any other code. Counted as general leave.
    Other(String),
}

impl TimeType {
    /// Classifies a raw time type code.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_summary::models::TimeType;
    ///
    /// assert_eq!(TimeType::from_code("300"), TimeType::Vacation);
    /// assert_eq!(TimeType::from_code("110"), TimeType::SickLeave("110".to_string()));
    /// assert_eq!(TimeType::from_code("flex"), TimeType::Flex);
    /// assert_eq!(TimeType::from_code("200"), TimeType::Other("200".to_string()));
    /// ```
    pub fn from_code(code: &str) -> Self {
        if code == VACATION_CODE {
            TimeType::Vacation
        } else if SICK_LEAVE_CODES.contains(&code) {
            TimeType::SickLeave(code.to_string())
        } else if code == FLEX_CODE {
            TimeType::Flex
        } else {
            TimeType::Other(code.to_string())
        }
    }

    /// Returns the raw code this time type was classified from.
    pub fn code(&self) -> &str {
        match self {
            TimeType::Vacation => VACATION_CODE,
            TimeType::SickLeave(code) | TimeType::Other(code) => code,
            TimeType::Flex => FLEX_CODE,
        }
    }

    /// Returns the summary category this time type contributes to.
    pub fn category(&self) -> LeaveCategory {
        match self {
            TimeType::Vacation => LeaveCategory::Vacation,
            TimeType::SickLeave(_) => LeaveCategory::SickLeave,
            TimeType::Flex => LeaveCategory::Excluded,
            TimeType::Other(_) => LeaveCategory::Leave,
        }
    }
}

impl From<String> for TimeType {
    fn from(code: String) -> Self {
        TimeType::from_code(&code)
    }
}

impl From<TimeType> for String {
    fn from(time_type: TimeType) -> Self {
        time_type.code().to_string()
    }
}

impl fmt::Display for TimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The summary counter family a time type feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveCategory {
    /// Counted in `vacation_days`.
    Vacation,
    /// Counted in `sick_leave_days` and, by reporting category, one bucket.
    SickLeave,
    /// Counted in `leave_days`.
    Leave,
    /// Not counted anywhere.
    Excluded,
}

/// Sick leave duration bucket attached to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportingCategory {
    /// Short sick leave of at most three days (`"SHORT_LE_3D"`).
    ShortUpTo3Days,
    /// Short sick leave of more than three days (`"SHORT_GT_3D"`).
    ShortOver3Days,
    /// Long sick leave under eight weeks (`"LONG_LT_8W"`).
    LongUnder8Weeks,
    /// Long sick leave over eight weeks (`"LONG_GT_8W"`).
    LongOver8Weeks,
    /// Any other tag. Feeds no bucket.
    Unrecognized(String),
}

impl ReportingCategory {
    /// Parses a reporting category tag. Unknown tags are preserved.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "SHORT_LE_3D" => ReportingCategory::ShortUpTo3Days,
            "SHORT_GT_3D" => ReportingCategory::ShortOver3Days,
            "LONG_LT_8W" => ReportingCategory::LongUnder8Weeks,
            "LONG_GT_8W" => ReportingCategory::LongOver8Weeks,
            other => ReportingCategory::Unrecognized(other.to_string()),
        }
    }

    /// Returns the raw tag.
    pub fn tag(&self) -> &str {
        match self {
            ReportingCategory::ShortUpTo3Days => "SHORT_LE_3D",
            ReportingCategory::ShortOver3Days => "SHORT_GT_3D",
            ReportingCategory::LongUnder8Weeks => "LONG_LT_8W",
            ReportingCategory::LongOver8Weeks => "LONG_GT_8W",
            ReportingCategory::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for ReportingCategory {
    fn from(tag: String) -> Self {
        ReportingCategory::from_tag(&tag)
    }
}

impl From<ReportingCategory> for String {
    fn from(category: ReportingCategory) -> Self {
        category.tag().to_string()
    }
}

/// One day's contribution within a time entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Day quantity. `None` means the backend sent none.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Sick leave duration bucket; only consulted for sick leave entries.
    #[serde(default)]
    pub reporting_category: Option<ReportingCategory>,
}

impl CalendarDay {
    /// Creates a calendar day with an explicit quantity and no reporting category.
    pub fn with_quantity(quantity: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            reporting_category: None,
        }
    }

    /// Sets the reporting category.
    pub fn categorized(mut self, category: ReportingCategory) -> Self {
        self.reporting_category = Some(category);
        self
    }

    /// Returns the number of days this calendar day contributes.
    ///
    /// An absent quantity counts as [`DEFAULT_DAY_QUANTITY`]; an explicit
    /// zero stays zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_summary::models::CalendarDay;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(CalendarDay::default().days(), Decimal::ONE);
    /// assert_eq!(CalendarDay::with_quantity(Decimal::ZERO).days(), Decimal::ZERO);
    /// ```
    pub fn days(&self) -> Decimal {
        self.quantity.unwrap_or(DEFAULT_DAY_QUANTITY)
    }
}

/// One time-tracking record for an employee, spanning one or more calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// The time type this entry was booked under.
    pub time_type: TimeType,
    /// The per-day breakdown. May be empty.
    #[serde(default)]
    pub time_calendar: Vec<CalendarDay>,
}

impl TimeEntry {
    /// Creates a time entry from a raw code and its calendar days.
    pub fn new(code: &str, time_calendar: Vec<CalendarDay>) -> Self {
        Self {
            time_type: TimeType::from_code(code),
            time_calendar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sick_leave_codes_classify_as_sick_leave() {
        for code in SICK_LEAVE_CODES {
            assert_eq!(
                TimeType::from_code(code).category(),
                LeaveCategory::SickLeave,
                "code {code}"
            );
        }
    }

    #[test]
    fn test_codes_match_exactly_without_numeric_coercion() {
        assert_eq!(TimeType::from_code("0300").category(), LeaveCategory::Leave);
        assert_eq!(TimeType::from_code("300 ").category(), LeaveCategory::Leave);
        assert_eq!(TimeType::from_code("100.0").category(), LeaveCategory::Leave);
        assert_eq!(TimeType::from_code("FLEX").category(), LeaveCategory::Leave);
    }

    #[test]
    fn test_flex_is_excluded() {
        assert_eq!(TimeType::from_code("flex").category(), LeaveCategory::Excluded);
    }

    #[test]
    fn test_empty_code_is_general_leave() {
        assert_eq!(TimeType::from_code(""), TimeType::Other(String::new()));
        assert_eq!(TimeType::from_code("").category(), LeaveCategory::Leave);
    }

    #[test]
    fn test_time_type_keeps_original_code() {
        assert_eq!(TimeType::from_code("120").code(), "120");
        assert_eq!(TimeType::from_code("410").code(), "410");
        assert_eq!(TimeType::Vacation.to_string(), "300");
    }

    #[test]
    fn test_reporting_category_tags() {
        assert_eq!(
            ReportingCategory::from_tag("SHORT_LE_3D"),
            ReportingCategory::ShortUpTo3Days
        );
        assert_eq!(
            ReportingCategory::from_tag("LONG_GT_8W"),
            ReportingCategory::LongOver8Weeks
        );
        assert_eq!(
            ReportingCategory::from_tag("short_le_3d"),
            ReportingCategory::Unrecognized("short_le_3d".to_string())
        );
        assert_eq!(ReportingCategory::LongUnder8Weeks.tag(), "LONG_LT_8W");
    }

    #[test]
    fn test_calendar_day_quantity_defaults_to_one() {
        assert_eq!(CalendarDay::default().days(), DEFAULT_DAY_QUANTITY);
        assert_eq!(CalendarDay::with_quantity(Decimal::new(5, 1)).days(), Decimal::new(5, 1));
    }

    #[test]
    fn test_zero_quantity_is_not_absent() {
        assert_eq!(CalendarDay::with_quantity(Decimal::ZERO).days(), Decimal::ZERO);
    }

    #[test]
    fn test_time_entry_deserializes_from_camel_case() {
        let entry: TimeEntry = serde_json::from_str(
            r#"{"timeType":"100","timeCalendar":[{"quantity":2,"reportingCategory":"SHORT_GT_3D"},{}]}"#,
        )
        .unwrap();

        assert_eq!(entry.time_type, TimeType::SickLeave("100".to_string()));
        assert_eq!(entry.time_calendar.len(), 2);
        assert_eq!(entry.time_calendar[0].days(), Decimal::from(2));
        assert_eq!(
            entry.time_calendar[0].reporting_category,
            Some(ReportingCategory::ShortOver3Days)
        );
        assert_eq!(entry.time_calendar[1].days(), Decimal::ONE);
    }

    #[test]
    fn test_time_entry_without_calendar_is_empty() {
        let entry: TimeEntry = serde_json::from_str(r#"{"timeType":"300"}"#).unwrap();
        assert!(entry.time_calendar.is_empty());
    }
}
