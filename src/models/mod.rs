//! Core data models for the Work-Calendar Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar_day;
mod duration_result;
mod time_span;

pub use attendance::{AttendanceDay, AttendanceMetrics, FormattedAttendance, format_hms};
pub use calendar_day::{CalendarDay, HolidayType, SECONDS_PER_DAY, TimeWindow};
pub(crate) use calendar_day::window_from_pair;
pub use duration_result::{CalendarSource, DayContribution, DurationResult};
pub use time_span::TimeSpan;
