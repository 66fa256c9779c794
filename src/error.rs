//! Error types for the leave summary service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service can surface. The aggregation itself is
//! total and never produces one of these.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave summary service.
///
/// # Example
///
/// ```
/// use leave_summary::error::ServiceError;
///
/// let error = ServiceError::MissingConfigValue {
///     key: "XSUAA_CLIENT_ID".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing configuration value: XSUAA_CLIENT_ID");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration value was not provided by file or environment.
    #[error("Missing configuration value: {key}")]
    MissingConfigValue {
        /// The configuration key (environment variable name).
        key: String,
    },

    /// A configuration value was present but could not be interpreted.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfigValue {
        /// The configuration key (environment variable name).
        key: String,
        /// A description of what was wrong.
        message: String,
    },

    /// One or more request parameters were missing or empty.
    #[error("Missing parameters: {}", fields.join(", "))]
    MissingParameters {
        /// Names of the missing request fields.
        fields: Vec<String>,
    },

    /// A request date could not be parsed.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The request field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The requested range ends before it starts.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Start of the requested range.
        start: NaiveDate,
        /// End of the requested range.
        end: NaiveDate,
    },

    /// The OAuth token endpoint refused or failed the client-credentials grant.
    #[error("Token request failed: {message}")]
    TokenRequest {
        /// A description of the failure.
        message: String,
    },

    /// A request to a downstream endpoint could not be completed.
    #[error("Transport error during {operation}: {message}")]
    Transport {
        /// The backend operation being performed.
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// A downstream endpoint answered with a non-success status.
    #[error("Backend returned {status} during {operation}: {message}")]
    Backend {
        /// The backend operation being performed.
        operation: String,
        /// The HTTP status code returned.
        status: u16,
        /// The response body, if any.
        message: String,
    },

    /// A downstream response body could not be decoded.
    #[error("Failed to decode response for {operation}: {message}")]
    Decode {
        /// The backend operation being performed.
        operation: String,
        /// A description of the decode error.
        message: String,
    },
}

impl ServiceError {
    /// Returns true when the error originates from a downstream collaborator
    /// rather than from the caller's input or the local configuration.
    pub fn is_downstream(&self) -> bool {
        matches!(
            self,
            ServiceError::TokenRequest { .. }
                | ServiceError::Transport { .. }
                | ServiceError::Backend { .. }
                | ServiceError::Decode { .. }
        )
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
