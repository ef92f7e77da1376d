//! Calendar repository access for the Work-Calendar Engine.
//!
//! The engine only needs read access to one [`CalendarDay`] per date. Any
//! data source can provide it by implementing [`CalendarRepository`]; a plain
//! closure works too. [`InMemoryCalendar`] backs configuration-loaded
//! calendars and caller-side prefetching.

mod memory;

use chrono::NaiveDate;

use crate::config::DefaultCalendar;
use crate::models::{CalendarDay, CalendarSource};

pub use memory::InMemoryCalendar;

/// Read-only lookup of calendar days by date.
///
/// `lookup` returning `None` is a calendar miss, not a failure. Use
/// [`CalendarRepository::resolve`] to apply the default-calendar fallback.
///
/// # Example
///
/// ```
/// use work_calendar_engine::calendar::CalendarRepository;
/// use work_calendar_engine::config::DefaultCalendar;
/// use work_calendar_engine::models::{CalendarDay, CalendarSource};
/// use chrono::NaiveDate;
///
/// // Every date is closed
/// let calendar = |date: NaiveDate| Some(CalendarDay::closed(date));
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
/// let resolved = calendar.resolve(date, &DefaultCalendar::default());
/// assert_eq!(resolved.source, CalendarSource::Calendar);
/// assert!(!resolved.day.is_open());
/// ```
pub trait CalendarRepository {
    /// Returns the calendar day for `date`, or `None` when no record exists.
    fn lookup(&self, date: NaiveDate) -> Option<CalendarDay>;

    /// Looks up `date`, falling back to `defaults` on a miss.
    fn resolve(&self, date: NaiveDate, defaults: &DefaultCalendar) -> ResolvedDay {
        match self.lookup(date) {
            Some(day) => ResolvedDay {
                day,
                source: CalendarSource::Calendar,
            },
            None => ResolvedDay {
                day: defaults.day_for(date),
                source: CalendarSource::DefaultFallback,
            },
        }
    }
}

impl<F> CalendarRepository for F
where
    F: Fn(NaiveDate) -> Option<CalendarDay>,
{
    fn lookup(&self, date: NaiveDate) -> Option<CalendarDay> {
        self(date)
    }
}

/// A calendar day together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    /// The day in force for the date.
    pub day: CalendarDay,
    /// Whether it is an explicit record or the fallback.
    pub source: CalendarSource,
}
