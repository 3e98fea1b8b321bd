//! HTTP request handlers for the Pay and Withholding Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_withholding, compute_pay, get_effective_schedule_dates};
use crate::models::{PenaltyRules, ShiftInterval, TaxProfile};

use super::request::{parse_date, PayRequest, WithholdingRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay", post(pay_handler))
        .route("/withholding", post(withholding_handler))
        .route("/schedules/effective", get(effective_schedules_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into an API error response.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /pay endpoint.
///
/// Splits the submitted shift against the submitted penalty rules and
/// returns the full pay breakdown.
async fn pay_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types; date parsing happens here
    let interval: ShiftInterval = match request.shift.try_into() {
        Ok(interval) => interval,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let rules: PenaltyRules = match request.penalty_rules.try_into() {
        Ok(rules) => rules,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match compute_pay(
        &interval,
        &rules,
        request.base_rate_cents_per_hour,
        request.penalty_rate_cents_per_hour,
    ) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                total_minutes = breakdown.total_minutes,
                total_pay_cents = breakdown.total_pay_cents,
                "Pay calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /withholding endpoint.
///
/// Estimates the per-period withholding for the submitted gross amount and
/// tax profile, using the schedule versions effective on the pay date.
async fn withholding_handler(
    State(state): State<AppState>,
    payload: Result<Json<WithholdingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing withholding request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let pay_date = match parse_date(&request.pay_date) {
        Ok(date) => date,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let profile: TaxProfile = request.profile.into();

    match calculate_withholding(
        state.tables().tables(),
        pay_date,
        request.gross_for_period,
        request.frequency,
        &profile,
    ) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                pay_date = %pay_date,
                frequency = %request.frequency,
                total_withheld = %breakdown.total_withheld,
                "Withholding calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Query parameters for the GET /schedules/effective endpoint.
#[derive(Debug, Deserialize)]
struct EffectiveSchedulesQuery {
    /// The pay date, as `YYYY-MM-DD`.
    pay_date: String,
}

/// Handler for the GET /schedules/effective endpoint.
///
/// Returns the effective dates of the schedule versions applicable to the
/// given pay date, for display and audit.
async fn effective_schedules_handler(
    State(state): State<AppState>,
    Query(query): Query<EffectiveSchedulesQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let pay_date = match parse_date(&query.pay_date) {
        Ok(date) => date,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match get_effective_schedule_dates(state.tables().tables(), pay_date) {
        Ok(dates) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(dates),
        )
            .into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Logs an engine error and renders it as an HTTP response.
fn engine_error_response(
    correlation_id: Uuid,
    err: crate::error::EngineError,
) -> axum::response::Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
