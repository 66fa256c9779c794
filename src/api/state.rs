//! Application state for the leave summary API.

use std::sync::Arc;

use crate::client::HrBackend;

/// Shared application state.
///
/// Holds the HR backend every request talks to.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn HrBackend>,
}

impl AppState {
    /// Creates a new application state around the given backend.
    pub fn new(backend: impl HrBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &dyn HrBackend {
        self.backend.as_ref()
    }
}
