//! OData v2 wire types for the employee time entity set.
//!
//! These mirror the loosely shaped JSON the backend returns. Conversion into
//! the domain [`TimeEntry`] applies every default exactly once.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::models::{CalendarDay, ReportingCategory, TimeEntry, TimeType};

/// Top-level OData v2 JSON envelope: `{ "d": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataEnvelope<T> {
    /// The payload.
    pub d: ODataCollection<T>,
}

/// An OData v2 collection: `{ "results": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataCollection<T> {
    /// The records. Missing means none.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// An expanded navigation property.
///
/// OData v2 wraps expanded collections in `{ "results": [...] }`; a bare
/// array is accepted too. A deferred (unexpanded) link has no `results`
/// and counts as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NavigationCollection<T> {
    /// `[...]`
    Inline(Vec<T>),
    /// `{ "results": [...] }` or `{ "__deferred": ... }`
    Wrapped(ODataCollection<T>),
}

impl<T> NavigationCollection<T> {
    /// Returns the records.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            NavigationCollection::Inline(items) => items,
            NavigationCollection::Wrapped(collection) => collection.results,
        }
    }
}

/// One `employeeTime` record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTimeRecord {
    /// Time type code. A non-string code never matches a known type.
    #[serde(default, deserialize_with = "lenient_time_type")]
    pub time_type: Option<TimeType>,
    /// Expanded calendar days. A malformed collection reads as absent.
    #[serde(default, deserialize_with = "lenient_time_calendar")]
    pub time_calendar: Option<NavigationCollection<TimeCalendarRecord>>,
}

fn lenient_time_type<'de, D>(deserializer: D) -> Result<Option<TimeType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(code)) => Some(TimeType::from_code(&code)),
        Some(other) => {
            warn!(time_type = %other, "Non-string time type counted as other leave");
            Some(TimeType::Other(other.to_string()))
        }
    })
}

fn lenient_time_calendar<'de, D>(
    deserializer: D,
) -> Result<Option<NavigationCollection<TimeCalendarRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(collection) => Ok(Some(collection)),
        Err(e) => {
            warn!(error = %e, "Malformed timeCalendar treated as empty");
            Ok(None)
        }
    }
}

/// One `timeCalendar` record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCalendarRecord {
    /// Day quantity, as a JSON number or decimal string.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Sick leave duration bucket tag.
    #[serde(default)]
    pub reporting_category: Option<String>,
}

impl From<TimeCalendarRecord> for CalendarDay {
    fn from(record: TimeCalendarRecord) -> Self {
        let quantity = record.quantity.map(|q| {
            if q.is_sign_negative() && !q.is_zero() {
                warn!(quantity = %q, "Negative calendar quantity clamped to zero");
                Decimal::ZERO
            } else {
                q
            }
        });

        CalendarDay {
            quantity,
            reporting_category: record
                .reporting_category
                .map(|tag| ReportingCategory::from_tag(&tag)),
        }
    }
}

impl From<EmployeeTimeRecord> for TimeEntry {
    fn from(record: EmployeeTimeRecord) -> Self {
        TimeEntry {
            time_type: record
                .time_type
                .unwrap_or_else(|| TimeType::from_code("")),
            time_calendar: record
                .time_calendar
                .map(NavigationCollection::into_vec)
                .unwrap_or_default()
                .into_iter()
                .map(CalendarDay::from)
                .collect(),
        }
    }
}

/// Decodes an `employeeTime` response body into domain entries.
pub fn parse_time_entries(body: &[u8]) -> serde_json::Result<Vec<TimeEntry>> {
    let envelope: ODataEnvelope<EmployeeTimeRecord> = serde_json::from_slice(body)?;
    Ok(envelope.d.results.into_iter().map(TimeEntry::from).collect())
}
