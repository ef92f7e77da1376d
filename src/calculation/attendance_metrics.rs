//! Single-day attendance metrics.
//!
//! This module derives lateness, early departure and presence from one
//! clock-in/clock-out pair and the day's calendar record. It reuses the
//! clamping primitives of the duration engine on a single segment and never
//! splits across dates.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::calendar::CalendarRepository;
use crate::config::DefaultCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceDay, AttendanceMetrics};

use super::clamp::seconds_after;

/// Computes lateness, early departure and presence for one attendance day.
///
/// # Rules
///
/// - `lateness`: entry minus shift start, when entry is later than shift start
/// - `early_departure`: shift end minus exit, when exit is earlier than shift end
/// - `presence`: exit minus entry, when both are recorded
/// - A day without a shift window (closed) never produces lateness or early departure
/// - Missing entry or exit yields zero for every metric that needs it
///
/// # Errors
///
/// Returns `InconsistentAttendance` when both times are present and exit
/// precedes entry. The record is flagged rather than clamped.
///
/// # Example
///
/// ```
/// use work_calendar_engine::calculation::compute_attendance;
/// use work_calendar_engine::models::{AttendanceDay, CalendarDay, TimeWindow};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let day = AttendanceDay {
///     date,
///     entry_time: Some(t(8, 10)),
///     exit_time: Some(t(16, 45)),
///     calendar_day: CalendarDay::open(date, TimeWindow::new(t(8, 0), t(17, 0)).unwrap()),
/// };
///
/// let metrics = compute_attendance(&day).unwrap();
/// assert_eq!(metrics.lateness(), "00:10:00");
/// assert_eq!(metrics.early_departure(), "00:15:00");
/// assert_eq!(metrics.presence(), "08:35:00");
/// ```
pub fn compute_attendance(day: &AttendanceDay) -> EngineResult<AttendanceMetrics> {
    if let (Some(entry), Some(exit)) = (day.entry_time, day.exit_time) {
        if exit < entry {
            return Err(EngineError::InconsistentAttendance {
                date: day.date,
                entry,
                exit,
            });
        }
    }

    let shift = day.calendar_day.shift();

    let lateness_seconds = match (shift, day.entry_time) {
        (Some(shift), Some(entry)) => seconds_after(shift.start(), entry),
        _ => 0,
    };

    let early_departure_seconds = match (shift, day.exit_time) {
        (Some(shift), Some(exit)) => shift
            .end_seconds()
            .saturating_sub(exit.num_seconds_from_midnight()),
        _ => 0,
    };

    let presence_seconds = match (day.entry_time, day.exit_time) {
        (Some(entry), Some(exit)) => seconds_after(entry, exit),
        _ => 0,
    };

    Ok(AttendanceMetrics {
        lateness_seconds,
        early_departure_seconds,
        presence_seconds,
    })
}

impl AttendanceDay {
    /// Builds an attendance day by resolving `date` against a calendar.
    ///
    /// Uses the same default-calendar fallback as the duration engine, so a
    /// date without a record is measured against the default shift.
    pub fn resolve<C>(
        date: NaiveDate,
        entry_time: Option<NaiveTime>,
        exit_time: Option<NaiveTime>,
        calendar: &C,
        defaults: &DefaultCalendar,
    ) -> Self
    where
        C: CalendarRepository + ?Sized,
    {
        Self {
            date,
            entry_time,
            exit_time,
            calendar_day: calendar.resolve(date, defaults).day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::InMemoryCalendar;
    use crate::models::{CalendarDay, TimeWindow};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn open_day(date: &str) -> CalendarDay {
        CalendarDay::open(make_date(date), TimeWindow::new(t(8, 0), t(17, 0)).unwrap())
    }

    fn attendance(entry: Option<NaiveTime>, exit: Option<NaiveTime>) -> AttendanceDay {
        AttendanceDay {
            date: make_date("2026-03-02"),
            entry_time: entry,
            exit_time: exit,
            calendar_day: open_day("2026-03-02"),
        }
    }

    #[test]
    fn test_late_entry_reports_lateness() {
        let metrics = compute_attendance(&attendance(Some(t(8, 10)), None)).unwrap();
        assert_eq!(metrics.lateness(), "00:10:00");
        assert_eq!(metrics.presence(), "00:00:00");
    }

    #[test]
    fn test_early_exit_reports_early_departure() {
        let metrics = compute_attendance(&attendance(Some(t(8, 0)), Some(t(16, 45)))).unwrap();
        assert_eq!(metrics.early_departure(), "00:15:00");
        assert_eq!(metrics.lateness(), "00:00:00");
    }

    #[test]
    fn test_on_time_full_shift() {
        let metrics = compute_attendance(&attendance(Some(t(7, 50)), Some(t(17, 5)))).unwrap();
        assert_eq!(metrics.lateness_seconds, 0);
        assert_eq!(metrics.early_departure_seconds, 0);
        assert_eq!(metrics.presence(), "09:15:00");
    }

    #[test]
    fn test_exit_before_entry_is_inconsistent() {
        let result = compute_attendance(&attendance(Some(t(9, 0)), Some(t(8, 0))));
        assert_eq!(
            result,
            Err(EngineError::InconsistentAttendance {
                date: make_date("2026-03-02"),
                entry: t(9, 0),
                exit: t(8, 0),
            })
        );
    }

    #[test]
    fn test_exit_equal_to_entry_has_zero_presence() {
        let metrics = compute_attendance(&attendance(Some(t(10, 0)), Some(t(10, 0)))).unwrap();
        assert_eq!(metrics.presence_seconds, 0);
    }

    #[test]
    fn test_absence_record_is_all_zero() {
        let metrics = compute_attendance(&attendance(None, None)).unwrap();
        assert_eq!(metrics, AttendanceMetrics::default());
    }

    #[test]
    fn test_exit_only_reports_early_departure() {
        let metrics = compute_attendance(&attendance(None, Some(t(15, 0)))).unwrap();
        assert_eq!(metrics.early_departure(), "02:00:00");
        assert_eq!(metrics.presence_seconds, 0);
    }

    #[test]
    fn test_closed_day_has_no_lateness_or_early_departure() {
        let day = AttendanceDay {
            date: make_date("2026-03-08"),
            entry_time: Some(t(9, 0)),
            exit_time: Some(t(11, 30)),
            calendar_day: CalendarDay::closed(make_date("2026-03-08")),
        };

        let metrics = compute_attendance(&day).unwrap();
        assert_eq!(metrics.lateness_seconds, 0);
        assert_eq!(metrics.early_departure_seconds, 0);
        assert_eq!(metrics.presence(), "02:30:00");
    }

    #[test]
    fn test_shift_ending_at_midnight() {
        let day = AttendanceDay {
            date: make_date("2026-03-02"),
            entry_time: Some(t(16, 0)),
            exit_time: Some(t(23, 0)),
            calendar_day: CalendarDay::open(make_date("2026-03-02"), TimeWindow::new(t(16, 0), t(0, 0)).unwrap()),
        };

        let metrics = compute_attendance(&day).unwrap();
        assert_eq!(metrics.lateness(), "00:00:00");
        assert_eq!(metrics.early_departure(), "01:00:00");
        assert_eq!(metrics.presence(), "07:00:00");
    }

    #[test]
    fn test_seconds_are_kept() {
        let metrics = compute_attendance(&attendance(
            Some(NaiveTime::from_hms_opt(8, 0, 42).unwrap()),
            None,
        ))
        .unwrap();
        assert_eq!(metrics.lateness(), "00:00:42");
    }

    #[test]
    fn test_resolve_uses_calendar_record() {
        let calendar = InMemoryCalendar::from_days(vec![
            CalendarDay::open(make_date("2026-03-02"), TimeWindow::new(t(6, 0), t(14, 0)).unwrap()),
        ])
        .unwrap();

        let day = AttendanceDay::resolve(
            make_date("2026-03-02"),
            Some(t(6, 20)),
            Some(t(14, 0)),
            &calendar,
            &DefaultCalendar::default(),
        );
        let metrics = compute_attendance(&day).unwrap();
        assert_eq!(metrics.lateness(), "00:20:00");
    }

    #[test]
    fn test_resolve_falls_back_to_default_shift() {
        let day = AttendanceDay::resolve(
            make_date("2019-06-03"),
            Some(t(8, 10)),
            Some(t(16, 45)),
            &InMemoryCalendar::new(),
            &DefaultCalendar::default(),
        );

        assert_eq!(day.calendar_day, DefaultCalendar::default().day_for(make_date("2019-06-03")));
        let metrics = compute_attendance(&day).unwrap();
        assert_eq!(metrics.lateness(), "00:10:00");
        assert_eq!(metrics.early_departure(), "00:15:00");
    }
}
