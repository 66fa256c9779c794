//! The HR backend seam.

use std::fmt;

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::{PlannedWorkingTimeUpdate, TimeEntry};

use super::TimeEntryQuery;

/// A bearer token issued by the OAuth token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Operations the summary flow needs from the HR backend.
///
/// The HTTP API only talks to this trait, so tests can substitute an
/// in-memory backend for [`SuccessFactorsClient`](super::SuccessFactorsClient).
#[async_trait]
pub trait HrBackend: Send + Sync {
    /// Obtains a bearer token for the calls below.
    async fn access_token(&self) -> ServiceResult<AccessToken>;

    /// Fetches the employee's time entries overlapping the query range,
    /// with calendar days restricted to that range.
    async fn fetch_time_entries(
        &self,
        token: &AccessToken,
        query: &TimeEntryQuery,
    ) -> ServiceResult<Vec<TimeEntry>>;

    /// Writes a summary onto the planned working time record it is keyed by.
    async fn update_planned_working_time(
        &self,
        token: &AccessToken,
        update: &PlannedWorkingTimeUpdate,
    ) -> ServiceResult<()>;
}
