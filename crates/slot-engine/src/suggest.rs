//! Meeting slots common to every participant.
//!
//! Free time is intersected left to right: the running intersection starts as
//! the first participant's free time and is overlapped with each following
//! participant in turn. Whatever survives the fold is free for everyone and is
//! then cut into slots of the requested duration.

use chrono::Duration;
use tracing::debug;

use crate::interval::Interval;
use crate::overlap::overlap;
use crate::participant::Participant;
use crate::split::split;

/// Suggest slots of exactly `duration` that every participant has free.
///
/// - No participants: no slots.
/// - One participant: their free intervals, unsplit and unfiltered.
/// - Two or more: duration-sized slots inside the shared free time, sorted by
///   start.
pub fn suggest(duration: Duration, participants: &[Participant]) -> Vec<Interval> {
    let (first, rest) = match participants {
        [] => return Vec::new(),
        [only] => return only.free().to_vec(),
        [first, rest @ ..] => (first, rest),
    };

    let mut common = first.free().to_vec();
    for (index, next) in rest.iter().enumerate() {
        common = overlap(duration, &common, next.free());
        debug!(
            participant = index + 1,
            shared = common.len(),
            "intersected free time"
        );
        if common.is_empty() {
            break;
        }
    }

    let mut slots = split(&common, duration);
    slots.sort();
    debug!(
        participants = participants.len(),
        minutes = duration.num_minutes(),
        slots = slots.len(),
        "suggested meeting slots"
    );
    slots
}
