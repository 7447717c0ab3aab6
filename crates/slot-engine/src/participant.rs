//! Participants and free-time derivation.
//!
//! A participant's free time is the complement of their busy intervals within
//! their daily bounds. Busy intervals must already be sorted by start and must
//! not overlap; back-to-back meetings leave no gap.

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;

/// One person taking part in a scheduling query.
///
/// `free` is derived at construction and never set directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    bounds: Interval,
    busy: Vec<Interval>,
    free: Vec<Interval>,
}

impl Participant {
    /// Build a participant and derive their free time.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInput` under the same conditions as
    /// [`derive_free`].
    pub fn new(busy: Vec<Interval>, bounds: Interval) -> Result<Self> {
        let free = derive_free(&busy, bounds)?;
        Ok(Self { bounds, busy, free })
    }

    /// The daily availability window.
    pub fn bounds(&self) -> Interval {
        self.bounds
    }

    pub fn busy(&self) -> &[Interval] {
        &self.busy
    }

    /// Free intervals, disjoint and sorted by start, all inside `bounds`.
    pub fn free(&self) -> &[Interval] {
        &self.free
    }
}

/// Compute the free intervals left by `busy` within `bounds`.
///
/// Gaps are emitted before the first meeting, between consecutive meetings
/// whose boundaries differ, and after the last meeting. Zero-width gaps are
/// never emitted. Each gap is clipped to `bounds`, so meetings that spill past
/// the daily window cannot produce free time outside it.
///
/// # Errors
/// Returns `ScheduleError::InvalidInput` if `busy` is empty, or if it is not
/// sorted by start with each meeting ending no later than the next begins.
pub fn derive_free(busy: &[Interval], bounds: Interval) -> Result<Vec<Interval>> {
    let (first, last) = match (busy.first(), busy.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(ScheduleError::InvalidInput(
                "participant has no meetings".to_string(),
            ))
        }
    };

    if let Some(pair) = busy.windows(2).find(|pair| pair[0].end() > pair[1].start()) {
        return Err(ScheduleError::InvalidInput(format!(
            "meetings must be sorted and non-overlapping: {} precedes {}",
            pair[0], pair[1]
        )));
    }

    let mut free = Vec::with_capacity(busy.len() + 1);
    let mut push_clipped = |start: NaiveTime, end: NaiveTime| {
        let start = bounds.start().max(start);
        let end = bounds.end().min(end);
        if start < end {
            free.push(Interval::from_ordered(start, end));
        }
    };

    if bounds.start() < first.start() {
        push_clipped(bounds.start(), first.start());
    }

    for pair in busy.windows(2) {
        if pair[0].end() != pair[1].start() {
            push_clipped(pair[0].end(), pair[1].start());
        }
    }

    if bounds.end() > last.end() {
        push_clipped(last.end(), bounds.end());
    }

    Ok(free)
}
