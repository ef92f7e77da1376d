//! Configuration types for the Work-Calendar Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarDay, HolidayType, TimeWindow, window_from_pair};

/// Start of the default shift applied when a date has no calendar record.
pub const DEFAULT_SHIFT_START: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// End of the default shift applied when a date has no calendar record.
pub const DEFAULT_SHIFT_END: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// The default-calendar fallback policy.
///
/// When the calendar repository has no record for a date, the engine treats
/// that date as an open day built from this template. A miss is never an
/// error.
///
/// The template is validated at construction; [`DefaultCalendar::day_for`]
/// cannot fail.
///
/// # Example
///
/// ```
/// use work_calendar_engine::config::DefaultCalendar;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let defaults = DefaultCalendar::default();
/// let day = defaults.day_for(NaiveDate::from_ymd_opt(2019, 6, 3).unwrap());
///
/// assert!(day.is_open());
/// assert_eq!(day.shift().unwrap().start(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// assert_eq!(day.shift().unwrap().end(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
/// assert!(day.break_window().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DefaultCalendarRecord")]
pub struct DefaultCalendar {
    shift: TimeWindow,
    break_window: Option<TimeWindow>,
    overtime: Option<TimeWindow>,
}

impl Default for DefaultCalendar {
    fn default() -> Self {
        Self {
            shift: TimeWindow {
                start: DEFAULT_SHIFT_START,
                end: DEFAULT_SHIFT_END,
            },
            break_window: None,
            overtime: None,
        }
    }
}

impl DefaultCalendar {
    /// Creates a fallback template with the given shift and no break.
    pub fn new(shift: TimeWindow) -> Self {
        Self {
            shift,
            break_window: None,
            overtime: None,
        }
    }

    /// Adds a break, which must lie inside the shift.
    pub fn with_break(mut self, break_window: TimeWindow) -> EngineResult<Self> {
        if !self.shift.contains_window(&break_window) {
            return Err(EngineError::InvalidTimeWindow {
                start: break_window.start(),
                end: break_window.end(),
            });
        }
        self.break_window = Some(break_window);
        Ok(self)
    }

    /// Adds an overtime window.
    pub fn with_overtime(mut self, overtime: TimeWindow) -> Self {
        self.overtime = Some(overtime);
        self
    }

    /// The default shift window.
    pub fn shift(&self) -> TimeWindow {
        self.shift
    }

    /// Builds the calendar day the engine uses for a date with no record.
    pub fn day_for(&self, date: NaiveDate) -> CalendarDay {
        CalendarDay {
            date,
            is_open: true,
            shift: Some(self.shift),
            break_window: self.break_window,
            overtime: self.overtime,
            holiday_type: HolidayType::None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultCalendarRecord {
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    #[serde(default)]
    break_start: Option<NaiveTime>,
    #[serde(default)]
    break_end: Option<NaiveTime>,
    #[serde(default)]
    overtime_start: Option<NaiveTime>,
    #[serde(default)]
    overtime_end: Option<NaiveTime>,
}

impl TryFrom<DefaultCalendarRecord> for DefaultCalendar {
    type Error = String;

    fn try_from(record: DefaultCalendarRecord) -> Result<Self, String> {
        let shift = TimeWindow::new(record.shift_start, record.shift_end).map_err(|e| e.to_string())?;
        let mut defaults = DefaultCalendar::new(shift);

        if let Some(break_window) = window_from_pair("break", record.break_start, record.break_end)? {
            defaults = defaults
                .with_break(break_window)
                .map_err(|_| "default break lies outside the default shift".to_string())?;
        }
        if let Some(overtime) =
            window_from_pair("overtime", record.overtime_start, record.overtime_end)?
        {
            defaults = defaults.with_overtime(overtime);
        }

        Ok(defaults)
    }
}

/// Top-level engine configuration (`engine.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Fallback applied to dates without a calendar record.
    #[serde(default)]
    pub default_calendar: DefaultCalendar,
}

/// Structure of a calendar file under `calendar/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFile {
    /// The calendar days declared by this file.
    #[serde(default)]
    pub days: Vec<CalendarDay>,
}
