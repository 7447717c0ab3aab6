//! Input records: one JSON object per participant.
//!
//! ```json
//! [
//!   {
//!     "meetings": [["9:00", "10:30"], ["12:00", "13:00"]],
//!     "dailyBounds": ["8:00", "18:00"]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;
use crate::participant::Participant;

/// A raw participant record as read from the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Busy `[start, end]` clock pairs, sorted by start.
    #[serde(alias = "Mettings", alias = "Meetings")]
    pub meetings: Vec<Vec<String>>,
    /// The `[start, end]` clock pair bounding the participant's day.
    #[serde(rename = "dailyBounds", alias = "DailyBounds")]
    pub daily_bounds: Vec<String>,
}

impl ParticipantRecord {
    /// Parse every clock pair and derive the participant's free time.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInput` if there are no meetings, a pair
    /// does not hold exactly two clocks, or any clock fails to parse.
    pub fn into_participant(self) -> Result<Participant> {
        if self.meetings.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "participant has no meetings".to_string(),
            ));
        }

        let busy = self
            .meetings
            .iter()
            .map(|pair| interval_from_pair(pair, "meeting"))
            .collect::<Result<Vec<_>>>()?;
        let bounds = interval_from_pair(&self.daily_bounds, "daily bounds")?;

        Participant::new(busy, bounds)
    }
}

fn interval_from_pair(pair: &[String], what: &str) -> Result<Interval> {
    match pair {
        [start, end] => Interval::parse(start, end),
        _ => Err(ScheduleError::InvalidInput(format!(
            "{} must be a [start, end] pair, got {} value(s)",
            what,
            pair.len()
        ))),
    }
}

/// Decode a JSON array of records and build every participant.
///
/// The first malformed record aborts the whole load.
///
/// # Errors
/// Returns `ScheduleError::ParseFailure` if `json` is not an array of records,
/// or `ScheduleError::InvalidInput` if any record is malformed.
pub fn load_participants(json: &str) -> Result<Vec<Participant>> {
    let records: Vec<ParticipantRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(ParticipantRecord::into_participant)
        .collect()
}
