//! Duration result models.
//!
//! This module contains the [`DurationResult`] returned by the duration engine
//! and the per-day [`DayContribution`] entries that make up its optional
//! breakdown.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::HolidayType;

/// Where the calendar day used for a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSource {
    /// An explicit record from the calendar repository.
    Calendar,
    /// No record existed; the configured default calendar was applied.
    DefaultFallback,
}

/// The worked time contributed by a single calendar date.
///
/// # Example
///
/// ```
/// use work_calendar_engine::models::{CalendarSource, DayContribution, HolidayType};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let contribution = DayContribution {
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     segment_start: NaiveDateTime::parse_from_str("2026-03-02 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     segment_end: NaiveDateTime::parse_from_str("2026-03-02 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     source: CalendarSource::Calendar,
///     is_open: true,
///     holiday_type: HolidayType::None,
///     worked_seconds: 28_800,
///     worked_minutes: 480,
/// };
/// assert_eq!(contribution.worked_minutes, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContribution {
    /// The calendar date of this segment.
    pub date: NaiveDate,
    /// Start of the span portion falling on this date.
    pub segment_start: NaiveDateTime,
    /// End of the span portion falling on this date.
    pub segment_end: NaiveDateTime,
    /// Whether an explicit calendar record or the fallback was used.
    pub source: CalendarSource,
    /// Whether the resolved day was open.
    pub is_open: bool,
    /// Holiday classification of the resolved day.
    pub holiday_type: HolidayType,
    /// Worked seconds inside the day's workable windows.
    pub worked_seconds: u32,
    /// `worked_seconds` truncated to whole minutes.
    pub worked_minutes: u32,
}

/// The result of a duration computation.
///
/// `total_minutes` is truncated from `total_seconds` once, after summation,
/// so the result never reports more worked time than actually elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Total worked seconds across all days.
    pub total_seconds: u64,
    /// Total worked minutes, truncated.
    pub total_minutes: u64,
    /// Number of dates resolved through the default-calendar fallback.
    pub fallback_days: u32,
    /// Per-day breakdown, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<DayContribution>>,
}

impl DurationResult {
    /// Builds a result from a total in seconds, truncating to minutes.
    pub fn from_seconds(
        total_seconds: u64,
        fallback_days: u32,
        breakdown: Option<Vec<DayContribution>>,
    ) -> Self {
        Self {
            total_seconds,
            total_minutes: total_seconds / 60,
            fallback_days,
            breakdown,
        }
    }

    /// Total worked time in hours, truncated to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use work_calendar_engine::models::DurationResult;
    /// use rust_decimal::Decimal;
    ///
    /// // 7h 25m = 7.4166... hours
    /// let result = DurationResult::from_seconds(445 * 60, 0, None);
    /// assert_eq!(result.total_hours(), Decimal::new(741, 2));
    /// ```
    pub fn total_hours(&self) -> Decimal {
        (Decimal::from(self.total_minutes) / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_minutes_truncate_not_round() {
        let result = DurationResult::from_seconds(119, 0, None);
        assert_eq!(result.total_minutes, 1);
    }

    #[test]
    fn test_total_hours_for_whole_hours() {
        let result = DurationResult::from_seconds(8 * 3600, 0, None);
        assert_eq!(result.total_hours(), dec("8"));
    }

    #[test]
    fn test_total_hours_never_rounds_up() {
        // 59 minutes = 0.98333 hours
        let result = DurationResult::from_seconds(59 * 60, 0, None);
        assert_eq!(result.total_hours(), dec("0.98"));
    }

    #[test]
    fn test_breakdown_omitted_from_json_when_absent() {
        let result = DurationResult::from_seconds(600, 1, None);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("breakdown"));
        assert!(json.contains("\"fallback_days\":1"));
    }

    #[test]
    fn test_calendar_source_serialization() {
        let json = serde_json::to_string(&CalendarSource::DefaultFallback).unwrap();
        assert_eq!(json, "\"default_fallback\"");
    }
}
