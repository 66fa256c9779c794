//! Configuration types for the leave summary service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section is
//! optional in the file; missing values fall back to the defaults below or
//! to environment variables.

use serde::Deserialize;

/// Default listening host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default base URL of the HR backend's OData API.
pub const DEFAULT_API_BASE_URL: &str = "https://api55.sapsf.eu";

/// Default timeout for each downstream request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// OAuth client-credentials settings for the token endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the token service; `/oauth/token` is appended.
    #[serde(default)]
    pub token_url: Option<String>,
    /// OAuth client id.
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: Option<String>,
}

/// HR backend settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the OData API; `/odata/v2/...` is appended.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Timeout applied to every downstream request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Raw configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token endpoint settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Backend settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Resolved client credentials. All values are present.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    /// Base URL of the token service.
    pub token_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Fully resolved service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Token endpoint credentials.
    pub credentials: Credentials,
    /// Backend settings.
    pub backend: BackendConfig,
}

impl ServiceConfig {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
