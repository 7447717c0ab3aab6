//! The `Interval` value type: a span of clock time on a single reference day.
//!
//! Only hour:minute precision is meaningful. Intervals render in the canonical
//! `{HH:MM, HH:MM}` form used for slot listings.

use std::fmt;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Layout used when rendering clock times.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// A contiguous span of clock time with `start <= end`.
///
/// Ordering is by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: NaiveTime,
    end: NaiveTime,
}

impl Interval {
    /// Build an interval, rejecting one that ends before it starts.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInput` if `start > end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start > end {
            return Err(ScheduleError::InvalidInput(format!(
                "interval ends before it starts: {} > {}",
                start.format(CLOCK_FORMAT),
                end.format(CLOCK_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// Build an interval from two `H:MM` / `HH:MM` clock strings.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInput` if either clock is malformed or the
    /// end precedes the start.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_clock(start)?, parse_clock(end)?)
    }

    /// Internal constructor for bounds already known to be ordered.
    pub(crate) fn from_ordered(start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when `t` lies strictly between start and end.
    pub fn contains_exclusive(&self, t: NaiveTime) -> bool {
        t > self.start && t < self.end
    }

    /// True when `t` lies between start and end, endpoints included.
    pub fn contains_inclusive(&self, t: NaiveTime) -> bool {
        t >= self.start && t <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}}}",
            self.start.format(CLOCK_FORMAT),
            self.end.format(CLOCK_FORMAT)
        )
    }
}

/// Parse a 24-hour clock string in `H:MM` or `HH:MM` form.
///
/// # Errors
/// Returns `ScheduleError::InvalidInput` for anything else, including
/// out-of-range hours or minutes.
pub fn parse_clock(text: &str) -> Result<NaiveTime> {
    let malformed = || {
        ScheduleError::InvalidInput(format!(
            "invalid clock time '{}', expected H:MM or HH:MM",
            text
        ))
    };

    let (hours, minutes) = text.split_once(':').ok_or_else(malformed)?;
    let well_formed = (1..=2).contains(&hours.len())
        && minutes.len() == 2
        && hours
            .bytes()
            .chain(minutes.bytes())
            .all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(malformed());
    }

    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(malformed)
}
