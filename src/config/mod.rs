//! Configuration loading and management for the leave summary service.
//!
//! This module loads the listener, OAuth and backend settings from an
//! optional YAML file and the process environment.
//!
//! # Example
//!
//! ```no_run
//! use leave_summary::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml")?
//!     .resolve(|key| std::env::var(key).ok())?;
//! println!("Backend: {}", config.backend.api_base_url);
//! # Ok::<(), leave_summary::error::ServiceError>(())
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_VAR, ConfigLoader};
pub use types::{
    AuthConfig, BackendConfig, Credentials, DEFAULT_API_BASE_URL, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, FileConfig, ServerConfig, ServiceConfig,
};
