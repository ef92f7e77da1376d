//! Span segmentation at midnight boundaries.
//!
//! This module splits a [`TimeSpan`] into one [`DaySegment`] per calendar date
//! so each portion can be measured against that date's calendar day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::TimeSpan;

use super::clamp::{SECONDS_PER_DAY, SecondsRange};

/// The portion of a span that falls on a single calendar date.
///
/// # Example
///
/// ```
/// use work_calendar_engine::calculation::DaySegment;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let segment = DaySegment {
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     start_time: NaiveDateTime::parse_from_str("2026-03-02 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-03-03 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(segment.elapsed_seconds(), 7200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The calendar date this segment belongs to.
    pub date: NaiveDate,
    /// The start of this segment.
    pub start_time: NaiveDateTime,
    /// The end of this segment, at most the following midnight.
    pub end_time: NaiveDateTime,
}

impl DaySegment {
    /// Wall-clock seconds covered by this segment.
    pub fn elapsed_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    /// The segment as seconds since midnight of its date; midnight at the end maps to 24:00.
    pub fn seconds_of_day(&self) -> SecondsRange {
        let start = self.start_time.time().num_seconds_from_midnight();
        let end = if self.end_time.date() > self.date {
            SECONDS_PER_DAY
        } else {
            self.end_time.time().num_seconds_from_midnight()
        };
        SecondsRange::new(start, end)
    }
}

/// Segments a span by day boundaries.
///
/// # Behavior
///
/// - A span entirely within one day returns a single segment
/// - A span crossing midnight returns one segment per date touched
/// - Segments are ordered chronologically and tile the span without gaps
/// - A span ending exactly at midnight does not produce an empty trailing segment
///
/// # Example
///
/// ```
/// use work_calendar_engine::calculation::segment_by_day;
/// use work_calendar_engine::models::TimeSpan;
/// use chrono::NaiveDateTime;
///
/// let at = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let span = TimeSpan::new(at("2026-03-02 22:00:00"), at("2026-03-04 06:00:00")).unwrap();
///
/// let segments = segment_by_day(&span);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].elapsed_seconds(), 2 * 3600);
/// assert_eq!(segments[1].elapsed_seconds(), 24 * 3600);
/// assert_eq!(segments[2].elapsed_seconds(), 6 * 3600);
/// ```
pub fn segment_by_day(span: &TimeSpan) -> Vec<DaySegment> {
    day_segments(span).collect()
}

/// Lazily yields the same segments as [`segment_by_day`], one date at a time.
pub fn day_segments(span: &TimeSpan) -> DaySegments {
    DaySegments {
        current_start: span.start,
        end: span.end,
    }
}

/// Iterator over the day segments of a span. See [`day_segments`].
#[derive(Debug, Clone)]
pub struct DaySegments {
    current_start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Iterator for DaySegments {
    type Item = DaySegment;

    fn next(&mut self) -> Option<DaySegment> {
        if self.current_start >= self.end {
            return None;
        }

        let date = self.current_start.date();

        // Segment ends at either the next midnight or the span end, whichever is first
        let segment_end = match date.succ_opt() {
            Some(next_day) => next_day.and_time(NaiveTime::MIN).min(self.end),
            None => self.end,
        };

        let segment = DaySegment {
            date,
            start_time: self.current_start,
            end_time: segment_end,
        };
        self.current_start = segment_end;
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn span(start: NaiveDateTime, end: NaiveDateTime) -> TimeSpan {
        TimeSpan::new(start, end).unwrap()
    }

    #[test]
    fn test_single_day_span_single_segment() {
        let segments = segment_by_day(&span(
            make_datetime("2026-03-02", "07:30:00"),
            make_datetime("2026-03-02", "18:00:00"),
        ));

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].date, make_date("2026-03-02"));
        assert_eq!(segments[0].seconds_of_day(), SecondsRange::new(27_000, 64_800));
    }

    #[test]
    fn test_overnight_span_two_segments() {
        let segments = segment_by_day(&span(
            make_datetime("2026-03-02", "22:00:00"),
            make_datetime("2026-03-03", "06:00:00"),
        ));

        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].date, make_date("2026-03-02"));
        assert_eq!(segments[0].end_time, make_datetime("2026-03-03", "00:00:00"));
        assert_eq!(segments[0].seconds_of_day(), SecondsRange::new(22 * 3600, SECONDS_PER_DAY));

        assert_eq!(segments[1].date, make_date("2026-03-03"));
        assert_eq!(segments[1].start_time, make_datetime("2026-03-03", "00:00:00"));
        assert_eq!(segments[1].seconds_of_day(), SecondsRange::new(0, 6 * 3600));
    }

    #[test]
    fn test_span_ending_at_midnight_has_no_empty_tail() {
        let segments = segment_by_day(&span(
            make_datetime("2026-03-02", "20:00:00"),
            make_datetime("2026-03-03", "00:00:00"),
        ));

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].seconds_of_day().end, SECONDS_PER_DAY);
    }

    #[test]
    fn test_full_days_in_the_middle() {
        let segments = segment_by_day(&span(
            make_datetime("2026-03-02", "12:00:00"),
            make_datetime("2026-03-05", "12:00:00"),
        ));

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1].seconds_of_day(), SecondsRange::new(0, SECONDS_PER_DAY));
        assert_eq!(segments[2].seconds_of_day(), SecondsRange::new(0, SECONDS_PER_DAY));
    }

    #[test]
    fn test_segment_seconds_sum_equals_span_elapsed() {
        let span = span(
            make_datetime("2026-02-27", "21:15:30"),
            make_datetime("2026-03-02", "03:45:10"),
        );

        let total: i64 = segment_by_day(&span).iter().map(|s| s.elapsed_seconds()).sum();
        assert_eq!(total, span.elapsed_seconds());
    }

    #[test]
    fn test_segments_ordered_and_contiguous() {
        let segments = segment_by_day(&span(
            make_datetime("2026-03-02", "22:00:00"),
            make_datetime("2026-03-06", "06:00:00"),
        ));

        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_leap_day_is_its_own_segment() {
        let segments = segment_by_day(&span(
            make_datetime("2028-02-28", "23:00:00"),
            make_datetime("2028-03-01", "01:00:00"),
        ));

        let dates: Vec<NaiveDate> = segments.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![make_date("2028-02-28"), make_date("2028-02-29"), make_date("2028-03-01")]
        );
    }

    #[test]
    fn test_unvalidated_reversed_span_yields_no_segments() {
        let reversed = TimeSpan {
            start: make_datetime("2026-03-02", "10:00:00"),
            end: make_datetime("2026-03-02", "09:00:00"),
        };
        assert!(segment_by_day(&reversed).is_empty());
    }

    #[test]
    fn test_day_segments_is_lazy_over_long_spans() {
        let long_span = span(
            make_datetime("2026-03-02", "12:00:00"),
            make_datetime("9999-12-31", "00:00:00"),
        );

        let first: Vec<DaySegment> = day_segments(&long_span).take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].date, make_date("2026-03-03"));
    }

    #[test]
    fn test_day_segments_matches_segment_by_day() {
        let week = span(
            make_datetime("2026-03-02", "22:00:00"),
            make_datetime("2026-03-09", "06:00:00"),
        );
        let lazy: Vec<DaySegment> = day_segments(&week).collect();
        assert_eq!(lazy, segment_by_day(&week));
    }

    #[test]
    fn test_day_segment_serialization() {
        let segment = DaySegment {
            date: make_date("2026-03-02"),
            start_time: make_datetime("2026-03-02", "22:00:00"),
            end_time: make_datetime("2026-03-03", "00:00:00"),
        };

        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"date\":\"2026-03-02\""));

        let deserialized: DaySegment = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, segment);
    }
}
