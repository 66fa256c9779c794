//! HTTP API module for the leave summary service.
//!
//! This module provides the REST endpoints: `POST /summary` computes,
//! persists and returns a leave summary, `GET /health` reports liveness.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, perform_summary};
pub use request::{DATE_FORMAT, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
