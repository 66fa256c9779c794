//! Collaborators on the HR backend side.
//!
//! This module holds the [`HrBackend`] trait the HTTP API depends on, the
//! OAuth token client, the OData wire types and the reqwest-based
//! [`SuccessFactorsClient`].

mod backend;
mod odata;
mod query;
mod successfactors;
mod token;

pub use backend::{AccessToken, HrBackend};
pub use odata::{
    EmployeeTimeRecord, NavigationCollection, ODataCollection, ODataEnvelope, TimeCalendarRecord,
    parse_time_entries,
};
pub use query::{TimeEntryQuery, escape_literal};
pub use successfactors::SuccessFactorsClient;
pub use token::{TOKEN_PATH, TokenClient};
