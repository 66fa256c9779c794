//! OAuth2 client-credentials token acquisition.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::Credentials;
use crate::error::{ServiceError, ServiceResult};

use super::AccessToken;

/// Path of the token endpoint relative to the token service URL.
pub const TOKEN_PATH: &str = "/oauth/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Requests bearer tokens with the client-credentials grant.
#[derive(Clone)]
pub struct TokenClient {
    http: Client,
    endpoint: String,
    credentials: Credentials,
}

impl TokenClient {
    /// Creates a token client sharing the given HTTP client.
    pub fn new(http: Client, credentials: Credentials) -> Self {
        let endpoint = format!("{}{}", credentials.token_url, TOKEN_PATH);
        Self {
            http,
            endpoint,
            credentials,
        }
    }

    /// Returns the full token endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests a new token.
    ///
    /// Sends `grant_type=client_credentials` as a form body with the client
    /// id and secret as HTTP Basic credentials.
    pub async fn fetch(&self) -> ServiceResult<AccessToken> {
        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.endpoint, "Token request failed");
                ServiceError::TokenRequest {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, endpoint = %self.endpoint, "Token endpoint returned error");
            return Err(ServiceError::TokenRequest {
                message: format!("{} - {}", status, body),
            });
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse token response");
            ServiceError::TokenRequest {
                message: format!("invalid token response: {}", e),
            }
        })?;

        debug!(expires_in = ?token.expires_in, "Access token acquired");
        Ok(AccessToken::new(token.access_token))
    }
}
