//! HTTP request handlers for the Work-Calendar Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! engine itself emits no logs; every request is traced here.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_attendance, compute_duration, compute_duration_with_breakdown};
use crate::models::{AttendanceDay, TimeSpan};

use super::request::{AttendanceRequest, DurationRequest};
use super::response::{ApiError, ApiErrorResponse, AttendanceResponse, DurationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/duration", post(duration_handler))
        .route("/attendance", post(attendance_handler))
        .with_state(state)
}

/// Handler for POST /duration.
///
/// Measures the requested span against the loaded calendar.
async fn duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let span = TimeSpan {
        start: request.start,
        end: request.end,
    };

    let started = Instant::now();
    let result = if request.breakdown {
        compute_duration_with_breakdown(&span, state.calendar(), state.defaults())
    } else {
        compute_duration(&span, state.calendar(), state.defaults())
    };

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start = %span.start,
                end = %span.end,
                total_minutes = result.total_minutes,
                fallback_days = result.fallback_days,
                duration_us = started.elapsed().as_micros(),
                "Duration computed"
            );
            json_response(StatusCode::OK, DurationResponse::from(result))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Duration computation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /attendance.
///
/// Resolves the date against the loaded calendar and derives the metrics.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let day = AttendanceDay::resolve(
        request.date,
        request.entry_time,
        request.exit_time,
        state.calendar(),
        state.defaults(),
    );

    let started = Instant::now();
    match compute_attendance(&day) {
        Ok(metrics) => {
            info!(
                correlation_id = %correlation_id,
                date = %day.date,
                lateness_seconds = metrics.lateness_seconds,
                early_departure_seconds = metrics.early_departure_seconds,
                duration_us = started.elapsed().as_micros(),
                "Attendance computed"
            );
            json_response(
                StatusCode::OK,
                AttendanceResponse {
                    date: day.date,
                    metrics: metrics.formatted(),
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance record rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extractor rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
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
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
