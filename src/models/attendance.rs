//! Attendance models.
//!
//! An [`AttendanceDay`] pairs one day's clock-in/clock-out times with the
//! resolved calendar day. [`AttendanceMetrics`] holds the derived durations in
//! seconds and formats them as `HH:MM:SS` at the boundary.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::CalendarDay;

/// Input to the single-day attendance computation.
///
/// Either time may be absent, e.g. for an absence record or an operator who
/// has clocked in but not yet out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The attendance date.
    pub date: NaiveDate,
    /// Clock-in time, if recorded.
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time, if recorded.
    pub exit_time: Option<NaiveTime>,
    /// The calendar day in force for `date`.
    pub calendar_day: CalendarDay,
}

/// Attendance durations in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMetrics {
    /// Time between shift start and a later entry.
    pub lateness_seconds: u32,
    /// Time between an earlier exit and shift end.
    pub early_departure_seconds: u32,
    /// Elapsed time from entry to exit.
    pub presence_seconds: u32,
}

impl AttendanceMetrics {
    /// Lateness as `HH:MM:SS`.
    pub fn lateness(&self) -> String {
        format_hms(self.lateness_seconds)
    }

    /// Early departure as `HH:MM:SS`.
    pub fn early_departure(&self) -> String {
        format_hms(self.early_departure_seconds)
    }

    /// Presence as `HH:MM:SS`.
    pub fn presence(&self) -> String {
        format_hms(self.presence_seconds)
    }

    /// The boundary representation with every duration formatted.
    pub fn formatted(&self) -> FormattedAttendance {
        FormattedAttendance {
            lateness: self.lateness(),
            early_departure: self.early_departure(),
            presence: self.presence(),
        }
    }
}

/// Attendance durations formatted as `HH:MM:SS` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedAttendance {
    /// Lateness, `00:00:00` when not applicable.
    pub lateness: String,
    /// Early departure, `00:00:00` when not applicable.
    pub early_departure: String,
    /// Presence, `00:00:00` when entry or exit is missing.
    pub presence: String,
}

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24.
///
/// # Example
///
/// ```
/// use work_calendar_engine::models::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(600), "00:10:00");
/// assert_eq!(format_hms(30 * 3600 + 61), "30:01:01");
/// ```
pub fn format_hms(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
