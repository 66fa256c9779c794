//! reqwest implementation of [`HrBackend`] for the SuccessFactors OData v2 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Request, Response, Url};
use tracing::{debug, error};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{PlannedWorkingTimeUpdate, TimeEntry};

use super::odata::parse_time_entries;
use super::query::escape_literal;
use super::{AccessToken, HrBackend, TimeEntryQuery, TokenClient};

const FETCH_OPERATION: &str = "fetch employee time";
const UPDATE_OPERATION: &str = "update planned working time";

/// Client for the `employeeTime` and `cust_plannedWorkingTime` entity sets.
#[derive(Clone)]
pub struct SuccessFactorsClient {
    http: Client,
    api_base_url: String,
    tokens: TokenClient,
}

impl SuccessFactorsClient {
    /// Builds a client with the configured timeout and credentials.
    pub fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.backend.request_timeout_secs))
            .build()
            .map_err(|e| ServiceError::InvalidConfigValue {
                key: "SF_REQUEST_TIMEOUT_SECS".to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self::new(
            http.clone(),
            config.backend.api_base_url.clone(),
            TokenClient::new(http, config.credentials.clone()),
        ))
    }

    /// Creates a client from its parts.
    pub fn new(http: Client, api_base_url: impl Into<String>, tokens: TokenClient) -> Self {
        Self {
            http,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn entity_url(&self, entity: &str, operation: &str) -> ServiceResult<Url> {
        let mut url = Url::parse(&self.api_base_url).map_err(|e| ServiceError::Transport {
            operation: operation.to_string(),
            message: format!("invalid base URL '{}': {}", self.api_base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::Transport {
                operation: operation.to_string(),
                message: format!("base URL '{}' cannot carry a path", self.api_base_url),
            })?
            .pop_if_empty()
            .extend(["odata", "v2", entity]);
        Ok(url)
    }

    /// URL of the `employeeTime` entity set, without query.
    pub fn employee_time_url(&self) -> ServiceResult<Url> {
        self.entity_url("employeeTime", FETCH_OPERATION)
    }

    /// Builds the `employeeTime` GET request.
    ///
    /// Query values are form-encoded: `$` becomes `%24` and spaces become `+`.
    pub fn employee_time_request(
        &self,
        token: &AccessToken,
        query: &TimeEntryQuery,
    ) -> ServiceResult<Request> {
        self.http
            .get(self.employee_time_url()?)
            .query(&query.query_pairs())
            .bearer_auth(token.secret())
            .build()
            .map_err(|e| transport_error(FETCH_OPERATION, e))
    }

    /// URL of one planned working time record.
    pub fn planned_working_time_url(&self, update: &PlannedWorkingTimeUpdate) -> ServiceResult<Url> {
        let key = format!(
            "cust_plannedWorkingTime(userId='{}',startDate=datetime'{}T00:00:00')",
            escape_literal(&update.user_id),
            update.start_date.format("%Y-%m-%d")
        );
        self.entity_url(&key, UPDATE_OPERATION)
    }
}

fn transport_error(operation: &str, e: reqwest::Error) -> ServiceError {
    error!(error = %e, operation, "Backend request failed");
    ServiceError::Transport {
        operation: operation.to_string(),
        message: e.to_string(),
    }
}

async fn ensure_success(response: Response, operation: &str) -> ServiceResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(status = %status, body = %body, operation, "Backend returned error");
    Err(ServiceError::Backend {
        operation: operation.to_string(),
        status: status.as_u16(),
        message: body,
    })
}

#[async_trait]
impl HrBackend for SuccessFactorsClient {
    async fn access_token(&self) -> ServiceResult<AccessToken> {
        self.tokens.fetch().await
    }

    async fn fetch_time_entries(
        &self,
        token: &AccessToken,
        query: &TimeEntryQuery,
    ) -> ServiceResult<Vec<TimeEntry>> {
        let request = self.employee_time_request(token, query)?;
        debug!(user_id = %query.user_id, filter = %query.filter(), "Fetching employee time");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| transport_error(FETCH_OPERATION, e))?;
        let response = ensure_success(response, FETCH_OPERATION).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(FETCH_OPERATION, e))?;

        parse_time_entries(&body).map_err(|e| {
            error!(error = %e, "Failed to decode employee time response");
            ServiceError::Decode {
                operation: FETCH_OPERATION.to_string(),
                message: e.to_string(),
            }
        })
    }

    async fn update_planned_working_time(
        &self,
        token: &AccessToken,
        update: &PlannedWorkingTimeUpdate,
    ) -> ServiceResult<()> {
        let url = self.planned_working_time_url(update)?;
        debug!(user_id = %update.user_id, start_date = %update.start_date, "Updating planned working time");

        let response = self
            .http
            .patch(url)
            .bearer_auth(token.secret())
            .json(&update.body())
            .send()
            .await
            .map_err(|e| transport_error(UPDATE_OPERATION, e))?;
        ensure_success(response, UPDATE_OPERATION).await?;

        Ok(())
    }
}
