//! Application state for the Work-Calendar Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::InMemoryCalendar;
use crate::config::{ConfigLoader, DefaultCalendar};

/// Shared application state.
///
/// Holds the loaded working calendar and the default calendar applied to
/// dates without a record. Both are read-only once the state is built.
#[derive(Clone)]
pub struct AppState {
    calendar: Arc<InMemoryCalendar>,
    defaults: Arc<DefaultCalendar>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let (calendar, defaults) = config.into_parts();
        Self::from_parts(calendar, defaults)
    }

    /// Creates a new application state from a calendar and defaults.
    pub fn from_parts(calendar: InMemoryCalendar, defaults: DefaultCalendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
            defaults: Arc::new(defaults),
        }
    }

    /// Returns the working calendar.
    pub fn calendar(&self) -> &InMemoryCalendar {
        &self.calendar
    }

    /// Returns the default calendar.
    pub fn defaults(&self) -> &DefaultCalendar {
        &self.defaults
    }
}
