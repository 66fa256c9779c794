//! HTTP request handlers for the leave summary API.
//!
//! This module contains the handler functions for all API endpoints and the
//! summary flow they drive.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, end_of_month};
use crate::client::{HrBackend, TimeEntryQuery};
use crate::error::ServiceResult;
use crate::models::{LeaveSummary, PlannedWorkingTimeUpdate};

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /summary endpoint.
///
/// Validates the request, runs the summary flow and returns the summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err.body_text(), "JSON data error");
                    ApiError::malformed_json(err.body_text())
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let query = match request.validate() {
        Ok(query) => query,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid summary request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match perform_summary(state.backend(), &query).await {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                user_id = %query.user_id,
                vacation_days = %summary.vacation_days,
                sick_leave_days = %summary.sick_leave_days,
                leave_days = %summary.leave_days,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                user_id = %query.user_id,
                error = %err,
                "Summary failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the summary flow for one employee and date range.
///
/// Acquires a token, fetches the time entries, aggregates them and writes
/// the result onto the planned working time record of the month that
/// contains the range's end date. Any downstream failure aborts the flow;
/// nothing is retried.
pub async fn perform_summary(
    backend: &dyn HrBackend,
    query: &TimeEntryQuery,
) -> ServiceResult<LeaveSummary> {
    let token = backend.access_token().await?;
    let entries = backend.fetch_time_entries(&token, query).await?;

    let summary = aggregate(&entries);
    info!(
        user_id = %query.user_id,
        entries_count = entries.len(),
        "Time entries aggregated"
    );

    let update = PlannedWorkingTimeUpdate::new(
        query.user_id.clone(),
        end_of_month(query.end_date),
        summary,
    );
    backend.update_planned_working_time(&token, &update).await?;

    Ok(summary)
}
