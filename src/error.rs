//! Error types for the Work-Calendar Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every hard failure the engine can report. A calendar lookup miss is not
//! an error; the default-calendar fallback resolves it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// The main error type for the Work-Calendar Engine.
///
/// # Example
///
/// ```
/// use work_calendar_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The span's end is not strictly after its start.
    #[error("Invalid span: end {end} is not after start {start}")]
    InvalidSpan {
        /// The start of the rejected span.
        start: NaiveDateTime,
        /// The end of the rejected span.
        end: NaiveDateTime,
    },

    /// An attendance record has an exit earlier than its entry.
    #[error("Inconsistent attendance on {date}: exit {exit} precedes entry {entry}")]
    InconsistentAttendance {
        /// The attendance date.
        date: NaiveDate,
        /// The recorded entry time.
        entry: NaiveTime,
        /// The recorded exit time.
        exit: NaiveTime,
    },

    /// A time-of-day window does not start before it ends.
    #[error("Invalid time window: {start} is not before {end}")]
    InvalidTimeWindow {
        /// The start of the rejected window.
        start: NaiveTime,
        /// The end of the rejected window.
        end: NaiveTime,
    },

    /// A calendar day violates one of its invariants.
    #[error("Invalid calendar day {date}: {message}")]
    InvalidCalendarDay {
        /// The date of the invalid record.
        date: NaiveDate,
        /// A description of the violated invariant.
        message: String,
    },

    /// Two calendar records were supplied for the same date.
    #[error("Duplicate calendar day: {date}")]
    DuplicateCalendarDay {
        /// The duplicated date.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
