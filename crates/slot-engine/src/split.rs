//! Cut intervals into back-to-back slots of a fixed duration.

use chrono::Duration;

use crate::interval::Interval;

/// Partition each interval into contiguous `duration`-sized slots.
///
/// Slots are taken from the front of each interval. A trailing remainder
/// shorter than `duration` is dropped. A non-positive duration produces no
/// slots.
pub fn split(intervals: &[Interval], duration: Duration) -> Vec<Interval> {
    if duration <= Duration::zero() {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for interval in intervals {
        let mut start = interval.start();
        let end = interval.end();

        while end - start >= duration {
            let slot_end = start + duration;
            slots.push(Interval::from_ordered(start, slot_end));
            start = slot_end;
        }
    }

    slots
}
