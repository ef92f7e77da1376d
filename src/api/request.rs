//! Request types for the Work-Calendar Engine API.
//!
//! This module defines the JSON request structures for the `/duration` and
//! `/attendance` endpoints.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Request body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Start of the span (local wall-clock time).
    pub start: NaiveDateTime,
    /// End of the span, exclusive.
    pub end: NaiveDateTime,
    /// Whether to include the per-day breakdown in the response.
    #[serde(default)]
    pub breakdown: bool,
}

/// Request body for the `/attendance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The attendance date.
    pub date: NaiveDate,
    /// Clock-in time, absent if not recorded.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time, absent if not recorded.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
}
