//! In-memory calendar repository.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::CalendarDay;

use super::CalendarRepository;

/// A calendar held entirely in memory, keyed by date.
///
/// Used for calendars loaded from configuration and as a snapshot when a
/// caller prefetches a date range ahead of a batch job.
///
/// # Example
///
/// ```
/// use work_calendar_engine::calendar::{CalendarRepository, InMemoryCalendar};
/// use work_calendar_engine::models::CalendarDay;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// let mut calendar = InMemoryCalendar::new();
/// calendar.insert(CalendarDay::closed(christmas)).unwrap();
///
/// assert!(calendar.lookup(christmas).is_some());
/// assert!(calendar.lookup(christmas.succ_opt().unwrap()).is_none());
///
/// // A date may only be declared once
/// assert!(calendar.insert(CalendarDay::closed(christmas)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCalendar {
    days: BTreeMap<NaiveDate, CalendarDay>,
}

impl InMemoryCalendar {
    /// Creates an empty calendar. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a list of days, rejecting duplicate dates.
    pub fn from_days<I>(days: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        let mut calendar = Self::new();
        for day in days {
            calendar.insert(day)?;
        }
        Ok(calendar)
    }

    /// Adds a day. Fails with `DuplicateCalendarDay` if the date already exists.
    pub fn insert(&mut self, day: CalendarDay) -> EngineResult<()> {
        let date = day.date();
        if self.days.contains_key(&date) {
            return Err(EngineError::DuplicateCalendarDay { date });
        }
        self.days.insert(date, day);
        Ok(())
    }

    /// Snapshots every record in `from..=to` from another repository.
    ///
    /// Lets a bulk import resolve all the dates it spans up front instead of
    /// issuing one lookup per row. Dates without a record stay absent, so
    /// the snapshot falls back exactly where the source would.
    pub fn prefetch<R>(repository: &R, from: NaiveDate, to: NaiveDate) -> Self
    where
        R: CalendarRepository + ?Sized,
    {
        let days = from
            .iter_days()
            .take_while(|date| *date <= to)
            .filter_map(|date| repository.lookup(date))
            .map(|day| (day.date(), day))
            .collect();
        Self { days }
    }

    /// Number of declared days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if no days are declared.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates the declared days in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.values()
    }
}

impl CalendarRepository for InMemoryCalendar {
    fn lookup(&self, date: NaiveDate) -> Option<CalendarDay> {
        self.days.get(&date).cloned()
    }
}
