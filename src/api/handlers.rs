//! HTTP request handlers for the payroll finishing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_union_benefit, run_finishing};
use crate::models::{PayPeriod, ShiftRecord, StatutoryHoliday, TimeDetail};

use super::request::{FinishingRequest, UnionBenefitRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/finish", post(finish_handler))
        .route("/union-benefit", post(union_benefit_handler))
        .with_state(state)
}

/// Handler for POST /finish endpoint.
///
/// Accepts a biweekly batch of shift records and returns the finished
/// output lines with run statistics.
async fn finish_handler(
    State(state): State<AppState>,
    payload: Result<Json<FinishingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing finishing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    // Convert request types to domain types
    let pay_period: PayPeriod = request.pay_period.into();
    let records: Vec<ShiftRecord> = request.records.into_iter().map(Into::into).collect();
    let time_details: Vec<TimeDetail> =
        request.time_details.into_iter().map(Into::into).collect();

    // An omitted holiday list falls back to the shipped calendar; an
    // explicit empty list disables holiday handling for the run.
    let holidays: Vec<StatutoryHoliday> = match request.holidays {
        Some(holidays) => holidays.into_iter().map(Into::into).collect(),
        None => state.config().holidays().to_vec(),
    };

    // Perform the finishing run
    let start_time = Instant::now();
    match run_finishing(&records, &time_details, &pay_period, &holidays) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                run_id = %result.run_id,
                employees = result.stats.employees_processed,
                output_lines = result.stats.output_lines,
                duration_us = duration.as_micros(),
                "Finishing run completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Finishing run failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /union-benefit endpoint.
///
/// Accepts a batch of shift records and returns the weekly-capped union
/// benefit cost report.
async fn union_benefit_handler(
    payload: Result<Json<UnionBenefitRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing union benefit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let records: Vec<ShiftRecord> = request.records.into_iter().map(Into::into).collect();
    let report = calculate_union_benefit(&records);

    info!(
        correlation_id = %correlation_id,
        employees = report.lines.len(),
        total_cost = %report.total_cost,
        "Union benefit report completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Builds the error response for a JSON extraction rejection.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let (status, error) = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(body_text))
            } else {
                (StatusCode::BAD_REQUEST, ApiError::malformed_json(body_text))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            (
                StatusCode::BAD_REQUEST,
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err)),
            )
        }
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::missing_content_type(),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            ApiError::malformed_json("Failed to parse request body"),
        ),
    };
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
