//! Month-end anchor date.
//!
//! Planned working time records are keyed by the last day of the month the
//! summary covers.

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the last calendar day of the month containing `date`.
///
/// # Examples
///
/// ```
/// use leave_summary::calculation::end_of_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(end_of_month(date), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };

    // Only fails past chrono's maximum year, where the month end is the max date.
    first_of_next
        .map(|d| d - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_thirty_one_day_month() {
        assert_eq!(end_of_month(date(2025, 1, 15)), date(2025, 1, 31));
    }

    #[test]
    fn test_thirty_day_month() {
        assert_eq!(end_of_month(date(2025, 4, 1)), date(2025, 4, 30));
    }

    #[test]
    fn test_february_in_leap_year() {
        assert_eq!(end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
    }

    #[test]
    fn test_february_in_common_year() {
        assert_eq!(end_of_month(date(2025, 2, 14)), date(2025, 2, 28));
    }

    #[test]
    fn test_century_february_not_leap() {
        assert_eq!(end_of_month(date(2100, 2, 3)), date(2100, 2, 28));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        assert_eq!(end_of_month(date(2025, 12, 5)), date(2025, 12, 31));
    }

    #[test]
    fn test_last_day_is_its_own_month_end() {
        assert_eq!(end_of_month(date(2025, 6, 30)), date(2025, 6, 30));
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(end_of_month(date(2025, 3, 1)), date(2025, 3, 31));
    }
}
