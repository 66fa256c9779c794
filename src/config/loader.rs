//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, which reads an optional
//! YAML file and layers environment variables over it.

use std::fs;
use std::path::Path;

use crate::error::{ServiceError, ServiceResult};

use super::types::{Credentials, FileConfig, ServiceConfig};

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "LEAVE_SUMMARY_CONFIG";

/// Loads the service configuration.
///
/// Values are resolved in this order, later sources winning:
///
/// 1. built-in defaults;
/// 2. the YAML file, when a path is given;
/// 3. environment variables (`HOST`, `PORT`, `XSUAA_URL`,
///    `XSUAA_CLIENT_ID`, `XSUAA_CLIENT_SECRET`, `SF_API_BASE_URL`,
///    `SF_REQUEST_TIMEOUT_SECS`).
///
/// # Example
///
/// ```no_run
/// use leave_summary::config::ConfigLoader;
///
/// let config = ConfigLoader::from_env()?;
/// println!("Listening on {}", config.bind_address());
/// # Ok::<(), leave_summary::error::ServiceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    file: FileConfig,
}

impl ConfigLoader {
    /// Starts from built-in defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the YAML file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ServiceError::ConfigParseError { message, .. } => ServiceError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Starts from YAML text.
    pub fn from_yaml_str(content: &str) -> ServiceResult<Self> {
        let file = serde_yaml::from_str::<FileConfig>(content).map_err(|e| {
            ServiceError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { file })
    }

    /// Loads the file named by `LEAVE_SUMMARY_CONFIG` (if set) and resolves
    /// it against the process environment.
    pub fn from_env() -> ServiceResult<ServiceConfig> {
        let loader = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path)?,
            _ => Self::new(),
        };
        loader.resolve(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` and checks that required values are set.
    ///
    /// Empty override values are ignored.
    pub fn resolve<F>(self, lookup: F) -> ServiceResult<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let FileConfig {
            mut server,
            auth,
            mut backend,
        } = self.file;

        if let Some(host) = get("HOST") {
            server.host = host;
        }
        if let Some(port) = get("PORT") {
            server.port = parse_number("PORT", &port)?;
        }
        if let Some(url) = get("SF_API_BASE_URL") {
            backend.api_base_url = url;
        }
        if let Some(secs) = get("SF_REQUEST_TIMEOUT_SECS") {
            backend.request_timeout_secs = parse_number("SF_REQUEST_TIMEOUT_SECS", &secs)?;
        }
        backend.api_base_url = backend.api_base_url.trim_end_matches('/').to_string();

        let credentials = Credentials {
            token_url: required("XSUAA_URL", get("XSUAA_URL").or(auth.token_url))?
                .trim_end_matches('/')
                .to_string(),
            client_id: required("XSUAA_CLIENT_ID", get("XSUAA_CLIENT_ID").or(auth.client_id))?,
            client_secret: required(
                "XSUAA_CLIENT_SECRET",
                get("XSUAA_CLIENT_SECRET").or(auth.client_secret),
            )?,
        };

        Ok(ServiceConfig {
            server,
            credentials,
            backend,
        })
    }
}

fn required(key: &str, value: Option<String>) -> ServiceResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServiceError::MissingConfigValue {
            key: key.to_string(),
        })
}

fn parse_number<T>(key: &str, raw: &str) -> ServiceResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ServiceError::InvalidConfigValue {
            key: key.to_string(),
            message: e.to_string(),
        })
}
