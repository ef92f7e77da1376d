//! Time-of-day clamping primitives.
//!
//! Both the duration engine and attendance metrics work on half-open ranges
//! of seconds since midnight. A range may end at `86_400` (24:00), which a
//! `NaiveTime` cannot express but a day segment running to midnight needs.

use chrono::{NaiveTime, Timelike};

use crate::models::{CalendarDay, TimeWindow};

pub use crate::models::SECONDS_PER_DAY;

/// A half-open range `[start, end)` of seconds since midnight.
///
/// A range whose end does not exceed its start is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondsRange {
    /// Inclusive start.
    pub start: u32,
    /// Exclusive end.
    pub end: u32,
}

impl SecondsRange {
    /// Creates a range. Reversed bounds collapse to an empty range at `start`.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Length in seconds.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the range covers no time.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Clamps this range to `[max(starts), min(ends)]`.
    pub fn clamp_to(&self, bounds: &SecondsRange) -> SecondsRange {
        SecondsRange::new(self.start.max(bounds.start), self.end.min(bounds.end))
    }

    /// Seconds shared by both ranges.
    pub fn overlap(&self, other: &SecondsRange) -> u32 {
        self.clamp_to(other).len()
    }

    /// The parts of this range not covered by `other` (zero, one or two pieces).
    pub fn subtract(&self, other: &SecondsRange) -> Vec<SecondsRange> {
        if self.overlap(other) == 0 {
            return if self.is_empty() { vec![] } else { vec![*self] };
        }

        [
            SecondsRange::new(self.start, other.start.min(self.end)),
            SecondsRange::new(other.end.max(self.start), self.end),
        ]
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
    }
}

impl From<TimeWindow> for SecondsRange {
    fn from(window: TimeWindow) -> Self {
        SecondsRange::new(window.start_seconds(), window.end_seconds())
    }
}

/// Merges ranges into a sorted list of disjoint, non-empty ranges.
pub fn union(mut ranges: Vec<SecondsRange>) -> Vec<SecondsRange> {
    ranges.retain(|range| !range.is_empty());
    ranges.sort_by_key(|range| range.start);

    let mut merged: Vec<SecondsRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// The time of a calendar day that counts as worked.
///
/// Open days count their shift minus the break, plus the overtime window.
/// Closed days count only their overtime window. The union never counts a
/// second twice, even when overtime overlaps the shift.
///
/// A segment only partly inside a closed day's overtime window still counts
/// the part that overlaps; it does not have to lie entirely inside.
pub fn workable_ranges(day: &CalendarDay) -> Vec<SecondsRange> {
    let mut ranges: Vec<SecondsRange> = Vec::new();

    if day.is_open() {
        if let Some(shift) = day.shift() {
            let shift = SecondsRange::from(shift);
            match day.break_window() {
                Some(break_window) => ranges.extend(shift.subtract(&break_window.into())),
                None => ranges.push(shift),
            }
        }
    }

    if let Some(overtime) = day.overtime() {
        ranges.push(overtime.into());
    }

    union(ranges)
}

/// Seconds of `segment` that fall inside any of `ranges`.
///
/// `ranges` must be disjoint, as produced by [`union`].
pub fn covered_seconds(segment: &SecondsRange, ranges: &[SecondsRange]) -> u32 {
    ranges.iter().map(|range| segment.overlap(range)).sum()
}

/// Seconds from `from` to `to`, or zero if `to` is not later.
pub fn seconds_after(from: NaiveTime, to: NaiveTime) -> u32 {
    to.num_seconds_from_midnight()
        .saturating_sub(from.num_seconds_from_midnight())
}
