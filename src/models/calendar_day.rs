//! Calendar day model and its time-of-day windows.
//!
//! A [`CalendarDay`] declares one date's operating parameters: whether the
//! site is open, the shift window, an optional break inside the shift, an
//! optional overtime window and a holiday classification. All invariants are
//! checked when a day is constructed, so the engine never sees an invalid one.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A half-open time-of-day range `[start, end)` within a single date.
///
/// An end of `00:00` means midnight at the end of the date (24:00), so a
/// window such as 16:00-24:00 covers the last eight hours of the day.
///
/// # Example
///
/// ```
/// use work_calendar_engine::models::TimeWindow;
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
///
/// let window = TimeWindow::new(t(8), t(17)).unwrap();
/// assert_eq!(window.duration_seconds(), 9 * 3600);
///
/// // Start must be strictly before end
/// assert!(TimeWindow::new(window.end(), window.start()).is_err());
///
/// // A 00:00 end runs to midnight
/// let late = TimeWindow::new(t(16), t(0)).unwrap();
/// assert_eq!(late.end_seconds(), 86_400);
/// assert_eq!(late.duration_seconds(), 8 * 3600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeWindowRecord")]
pub struct TimeWindow {
    pub(crate) start: NaiveTime,
    pub(crate) end: NaiveTime,
}

#[derive(Deserialize)]
struct TimeWindowRecord {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<TimeWindowRecord> for TimeWindow {
    type Error = EngineError;

    fn try_from(record: TimeWindowRecord) -> EngineResult<Self> {
        TimeWindow::new(record.start, record.end)
    }
}

impl TimeWindow {
    /// Creates a window, rejecting any window that does not end after it starts.
    ///
    /// An `end` of `00:00` is read as 24:00.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        let window = Self { start, end };
        if window.start_seconds() >= window.end_seconds() {
            return Err(EngineError::InvalidTimeWindow { start, end });
        }
        Ok(window)
    }

    /// The inclusive start of the window.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The exclusive end of the window; `00:00` stands for 24:00.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Start as seconds since midnight.
    pub fn start_seconds(&self) -> u32 {
        self.start.num_seconds_from_midnight()
    }

    /// End as seconds since midnight, `86_400` when the window runs to midnight.
    pub fn end_seconds(&self) -> u32 {
        match self.end.num_seconds_from_midnight() {
            0 => SECONDS_PER_DAY,
            seconds => seconds,
        }
    }

    /// Returns true if `other` lies entirely within this window.
    pub fn contains_window(&self, other: &TimeWindow) -> bool {
        self.start_seconds() <= other.start_seconds() && other.end_seconds() <= self.end_seconds()
    }

    /// Length of the window in whole seconds.
    pub fn duration_seconds(&self) -> u32 {
        self.end_seconds() - self.start_seconds()
    }
}

/// Number of seconds in a calendar day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Holiday classification of a calendar day.
///
/// Informational only: it is carried through to results for payroll
/// classification and never changes duration arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A regular day.
    #[default]
    None,
    /// A closure for which staff are paid.
    PaidClosure,
    /// A closure for which staff are not paid.
    UnpaidClosure,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::None => write!(f, "none"),
            HolidayType::PaidClosure => write!(f, "paid_closure"),
            HolidayType::UnpaidClosure => write!(f, "unpaid_closure"),
        }
    }
}

/// One date's declared operating parameters.
///
/// Construct with [`CalendarDay::open`] or [`CalendarDay::closed`] and refine
/// with the `with_*` methods. Deserialization goes through the same checks, so
/// a record read from configuration obeys the same invariants:
///
/// - an open day has a shift window, a closed day has none
/// - a break lies inside the shift (`shift_start <= break_start < break_end <= shift_end`)
/// - optional windows are all-or-nothing: a start without an end is rejected
///
/// # Example
///
/// ```
/// use work_calendar_engine::models::{CalendarDay, TimeWindow};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let day = CalendarDay::open(date, TimeWindow::new(t(8), t(17)).unwrap())
///     .with_break(TimeWindow::new(t(12), t(13)).unwrap())
///     .unwrap();
/// assert!(day.is_open());
/// assert_eq!(day.break_window().unwrap().start(), t(12));
///
/// // A break outside the shift is rejected
/// let outside = CalendarDay::open(date, TimeWindow::new(t(8), t(17)).unwrap())
///     .with_break(TimeWindow::new(t(17), t(18)).unwrap());
/// assert!(outside.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarDayRecord", into = "CalendarDayRecord")]
pub struct CalendarDay {
    pub(crate) date: NaiveDate,
    pub(crate) is_open: bool,
    pub(crate) shift: Option<TimeWindow>,
    pub(crate) break_window: Option<TimeWindow>,
    pub(crate) overtime: Option<TimeWindow>,
    pub(crate) holiday_type: HolidayType,
}

impl CalendarDay {
    /// Creates an open day with the given shift window.
    pub fn open(date: NaiveDate, shift: TimeWindow) -> Self {
        Self {
            date,
            is_open: true,
            shift: Some(shift),
            break_window: None,
            overtime: None,
            holiday_type: HolidayType::None,
        }
    }

    /// Creates a closed day with no shift.
    pub fn closed(date: NaiveDate) -> Self {
        Self {
            date,
            is_open: false,
            shift: None,
            break_window: None,
            overtime: None,
            holiday_type: HolidayType::None,
        }
    }

    /// Adds a break window, which must lie inside the shift of an open day.
    pub fn with_break(mut self, break_window: TimeWindow) -> EngineResult<Self> {
        let shift = self.shift.ok_or_else(|| EngineError::InvalidCalendarDay {
            date: self.date,
            message: "a closed day cannot declare a break window".to_string(),
        })?;

        if !shift.contains_window(&break_window) {
            return Err(EngineError::InvalidCalendarDay {
                date: self.date,
                message: format!(
                    "break {}-{} lies outside shift {}-{}",
                    break_window.start(),
                    break_window.end(),
                    shift.start(),
                    shift.end()
                ),
            });
        }

        self.break_window = Some(break_window);
        Ok(self)
    }

    /// Adds an overtime window. It may sit outside the shift or on a closed day.
    pub fn with_overtime(mut self, overtime: TimeWindow) -> Self {
        self.overtime = Some(overtime);
        self
    }

    /// Sets the holiday classification.
    pub fn with_holiday_type(mut self, holiday_type: HolidayType) -> Self {
        self.holiday_type = holiday_type;
        self
    }

    /// The date this record describes.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether production runs on this day.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The shift window, present exactly when the day is open.
    pub fn shift(&self) -> Option<TimeWindow> {
        self.shift
    }

    /// The break window, if any.
    pub fn break_window(&self) -> Option<TimeWindow> {
        self.break_window
    }

    /// The overtime window, if any.
    pub fn overtime(&self) -> Option<TimeWindow> {
        self.overtime
    }

    /// The holiday classification.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }
}

/// Flat wire representation of a [`CalendarDay`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalendarDayRecord {
    date: NaiveDate,
    #[serde(default = "default_is_open")]
    is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shift_start: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shift_end: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    break_start: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    break_end: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overtime_start: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overtime_end: Option<NaiveTime>,
    #[serde(default)]
    holiday_type: HolidayType,
}

fn default_is_open() -> bool {
    true
}

/// Builds an optional window from a start/end pair that must be all-or-nothing.
pub(crate) fn window_from_pair(
    name: &str,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> Result<Option<TimeWindow>, String> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => TimeWindow::new(start, end)
            .map(Some)
            .map_err(|_| format!("{name} start {start} is not before end {end}")),
        (Some(_), None) => Err(format!("{name} start given without an end")),
        (None, Some(_)) => Err(format!("{name} end given without a start")),
    }
}

impl TryFrom<CalendarDayRecord> for CalendarDay {
    type Error = EngineError;

    fn try_from(record: CalendarDayRecord) -> EngineResult<Self> {
        let date = record.date;
        let invalid = |message: String| EngineError::InvalidCalendarDay { date, message };

        let shift = window_from_pair("shift", record.shift_start, record.shift_end).map_err(invalid)?;
        let break_window =
            window_from_pair("break", record.break_start, record.break_end).map_err(invalid)?;
        let overtime =
            window_from_pair("overtime", record.overtime_start, record.overtime_end).map_err(invalid)?;

        let mut day = match (record.is_open, shift) {
            (true, Some(shift)) => CalendarDay::open(date, shift),
            (true, None) => return Err(invalid("an open day requires a shift window".to_string())),
            (false, None) => CalendarDay::closed(date),
            (false, Some(_)) => {
                return Err(invalid("a closed day cannot declare a shift window".to_string()));
            }
        };

        if let Some(break_window) = break_window {
            day = day.with_break(break_window)?;
        }
        if let Some(overtime) = overtime {
            day = day.with_overtime(overtime);
        }

        Ok(day.with_holiday_type(record.holiday_type))
    }
}

impl From<CalendarDay> for CalendarDayRecord {
    fn from(day: CalendarDay) -> Self {
        CalendarDayRecord {
            date: day.date,
            is_open: day.is_open,
            shift_start: day.shift.map(|w| w.start),
            shift_end: day.shift.map(|w| w.end),
            break_start: day.break_window.map(|w| w.start),
            break_end: day.break_window.map(|w| w.end),
            overtime_start: day.overtime.map(|w| w.start),
            overtime_end: day.overtime.map(|w| w.end),
            holiday_type: day.holiday_type,
        }
    }
}
