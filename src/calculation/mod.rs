//! Calculation logic for the Work-Calendar Engine.
//!
//! This module contains the duration engine, which measures a span against
//! the working calendar across any number of dates, and the single-day
//! attendance metrics built on the same clamping primitives.

mod attendance_metrics;
mod clamp;
mod day_segmentation;
mod duration_engine;

pub use attendance_metrics::compute_attendance;
pub use clamp::{SECONDS_PER_DAY, SecondsRange, workable_ranges};
pub use day_segmentation::{DaySegment, DaySegments, day_segments, segment_by_day};
pub use duration_engine::{
    compute_duration, compute_duration_with_breakdown, segment_worked_seconds,
};
