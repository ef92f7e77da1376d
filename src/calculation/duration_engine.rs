//! Work-calendar-aware duration computation.
//!
//! This module converts a [`TimeSpan`] that may cross several dates into the
//! number of minutes that fall inside each date's workable windows.
//!
//! The computation runs in three passes: the span is split at midnight
//! boundaries, every segment is measured against its resolved calendar day,
//! and the per-day seconds are folded into a total. Minutes are truncated
//! from the total only at the end.

use crate::calendar::CalendarRepository;
use crate::config::DefaultCalendar;
use crate::error::EngineResult;
use crate::models::{CalendarDay, CalendarSource, DayContribution, DurationResult, TimeSpan};

use super::clamp::{covered_seconds, workable_ranges};
use super::day_segmentation::{DaySegment, day_segments};

/// Computes the worked minutes of a span.
///
/// # Arguments
///
/// * `span` - The span to measure; rejected with `InvalidSpan` unless `end > start`
/// * `calendar` - Source of calendar days
/// * `defaults` - The fallback applied to dates the calendar has no record for
///
/// # Rules
///
/// - Open days count the shift window minus any break, plus any overtime window
/// - Closed days count only their overtime window
/// - Time counted by both the shift and the overtime window is counted once
/// - Dates with no calendar record use `defaults`
///
/// # Example
///
/// ```
/// use work_calendar_engine::calculation::compute_duration;
/// use work_calendar_engine::calendar::InMemoryCalendar;
/// use work_calendar_engine::config::DefaultCalendar;
/// use work_calendar_engine::models::{CalendarDay, TimeSpan, TimeWindow};
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let at = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let day = CalendarDay::open(date, TimeWindow::new(t(8), t(17)).unwrap())
///     .with_break(TimeWindow::new(t(12), t(13)).unwrap())
///     .unwrap();
/// let calendar = InMemoryCalendar::from_days(vec![day]).unwrap();
///
/// let span = TimeSpan::new(at("2026-03-02 07:30:00"), at("2026-03-02 18:00:00")).unwrap();
/// let result = compute_duration(&span, &calendar, &DefaultCalendar::default()).unwrap();
///
/// // 9h shift minus 1h break; time outside the shift is ignored
/// assert_eq!(result.total_minutes, 480);
/// ```
pub fn compute_duration<C>(
    span: &TimeSpan,
    calendar: &C,
    defaults: &DefaultCalendar,
) -> EngineResult<DurationResult>
where
    C: CalendarRepository + ?Sized,
{
    compute(span, calendar, defaults, false)
}

/// Computes the worked minutes of a span along with a per-day breakdown.
///
/// Identical to [`compute_duration`] except that the result carries one
/// [`DayContribution`] per date touched, recording which calendar source
/// was used for it.
pub fn compute_duration_with_breakdown<C>(
    span: &TimeSpan,
    calendar: &C,
    defaults: &DefaultCalendar,
) -> EngineResult<DurationResult>
where
    C: CalendarRepository + ?Sized,
{
    compute(span, calendar, defaults, true)
}

/// Worked seconds of a single-day segment against one calendar day.
///
/// This is the per-day term of the duration sum, exposed so callers can
/// check or reproduce an individual day's contribution.
pub fn segment_worked_seconds(segment: &DaySegment, day: &CalendarDay) -> u32 {
    covered_seconds(&segment.seconds_of_day(), &workable_ranges(day))
}

fn compute<C>(
    span: &TimeSpan,
    calendar: &C,
    defaults: &DefaultCalendar,
    with_breakdown: bool,
) -> EngineResult<DurationResult>
where
    C: CalendarRepository + ?Sized,
{
    span.validate()?;

    let mut total_seconds: u64 = 0;
    let mut fallback_days: u32 = 0;
    let mut breakdown = with_breakdown.then(Vec::new);

    for segment in day_segments(span) {
        let resolved = calendar.resolve(segment.date, defaults);
        let worked_seconds = segment_worked_seconds(&segment, &resolved.day);

        total_seconds += u64::from(worked_seconds);
        if resolved.source == CalendarSource::DefaultFallback {
            fallback_days += 1;
        }

        if let Some(contributions) = breakdown.as_mut() {
            contributions.push(DayContribution {
                date: segment.date,
                segment_start: segment.start_time,
                segment_end: segment.end_time,
                source: resolved.source,
                is_open: resolved.day.is_open(),
                holiday_type: resolved.day.holiday_type(),
                worked_seconds,
                worked_minutes: worked_seconds / 60,
            });
        }
    }

    Ok(DurationResult::from_seconds(
        total_seconds,
        fallback_days,
        breakdown,
    ))
}
