//! Time span model.
//!
//! A [`TimeSpan`] is the raw `(start, end)` pair supplied by a caller: a task
//! assignment, an imported row or a clock-in/clock-out pair.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A timestamp range `[start, end)`.
///
/// Spans are never silently swapped: [`TimeSpan::new`], [`TimeSpan::validate`]
/// and deserialization reject any span whose end is not strictly after its
/// start.
///
/// # Example
///
/// ```
/// use work_calendar_engine::models::TimeSpan;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-02 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let span = TimeSpan::new(start, end).unwrap();
/// assert_eq!(span.elapsed_seconds(), 37_800);
///
/// assert!(TimeSpan::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeSpanRecord")]
pub struct TimeSpan {
    /// The start of the span (inclusive).
    pub start: NaiveDateTime,
    /// The end of the span (exclusive).
    pub end: NaiveDateTime,
}

#[derive(Deserialize)]
struct TimeSpanRecord {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<TimeSpanRecord> for TimeSpan {
    type Error = EngineError;

    fn try_from(record: TimeSpanRecord) -> EngineResult<Self> {
        TimeSpan::new(record.start, record.end)
    }
}

impl TimeSpan {
    /// Creates a validated span.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        let span = Self { start, end };
        span.validate()?;
        Ok(span)
    }

    /// Checks the ordering invariant `end > start`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Wall-clock seconds between start and end, ignoring the calendar.
    pub fn elapsed_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}
