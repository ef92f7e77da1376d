//! Work-Calendar Engine
//!
//! This crate measures worked time between two instants against a working
//! calendar of per-day shift, break and overtime windows, and derives
//! single-day attendance metrics (lateness, early departure and presence).
//!
//! # Example
//!
//! ```
//! use work_calendar_engine::calculation::compute_duration;
//! use work_calendar_engine::calendar::InMemoryCalendar;
//! use work_calendar_engine::config::DefaultCalendar;
//! use work_calendar_engine::models::{CalendarDay, TimeSpan, TimeWindow};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//!
//! let day = CalendarDay::open(date, TimeWindow::new(t(8), t(17)).unwrap())
//!     .with_break(TimeWindow::new(t(12), t(13)).unwrap())
//!     .unwrap();
//! let calendar = InMemoryCalendar::from_days(vec![day]).unwrap();
//!
//! let span = TimeSpan::new(
//!     date.and_hms_opt(7, 30, 0).unwrap(),
//!     date.and_hms_opt(18, 0, 0).unwrap(),
//! )
//! .unwrap();
//!
//! let result = compute_duration(&span, &calendar, &DefaultCalendar::default()).unwrap();
//! assert_eq!(result.total_minutes, 480);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
