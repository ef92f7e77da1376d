//! Response types for the Work-Calendar Engine API.
//!
//! This module defines the success bodies of both endpoints together with
//! the error response structures and the mapping from [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DayContribution, DurationResult, FormattedAttendance};

/// Response body for the `/duration` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationResponse {
    /// Worked minutes, truncated.
    pub total_minutes: u64,
    /// Worked hours, truncated to two decimal places.
    pub total_hours: Decimal,
    /// Number of dates resolved through the default calendar.
    pub fallback_days: u32,
    /// Per-day contributions, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<DayContribution>>,
}

impl From<DurationResult> for DurationResponse {
    fn from(result: DurationResult) -> Self {
        Self {
            total_minutes: result.total_minutes,
            total_hours: result.total_hours(),
            fallback_days: result.fallback_days,
            breakdown: result.breakdown,
        }
    }
}

/// Response body for the `/attendance` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// The attendance date.
    pub date: NaiveDate,
    /// Lateness, early departure and presence as `HH:MM:SS`.
    #[serde(flatten)]
    pub metrics: FormattedAttendance,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a configuration error response.
    pub fn config_error(details: impl Into<String>) -> Self {
        Self::with_details("CONFIG_ERROR", "Configuration error", details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

/// Renders the error body as JSON with its status code.
impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidSpan { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SPAN",
                    message,
                    "The span end must be strictly after its start",
                ),
            },
            EngineError::InconsistentAttendance { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INCONSISTENT_ATTENDANCE",
                    message,
                    "The exit time must not precede the entry time",
                ),
            },
            EngineError::InvalidTimeWindow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TIME_WINDOW", message),
            },
            EngineError::InvalidCalendarDay { .. }
            | EngineError::DuplicateCalendarDay { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::config_error(message),
            },
        }
    }
}
