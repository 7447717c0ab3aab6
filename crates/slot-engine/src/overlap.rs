//! Pairwise overlap of two free-time sets.
//!
//! Every interval of one set is compared against every interval of the other.
//! A pair is only examined further when an endpoint of one lies strictly inside
//! the other; the overlap bounds are then picked with endpoint-inclusive tests.
//! Intervals that merely touch, or that are identical, never pass the first
//! check.

use chrono::{Duration, NaiveTime};

use crate::interval::Interval;

/// Find the shared regions between `a` and `b` that are at least `duration` long.
///
/// The longer list drives the outer loop. Results follow iteration order and
/// are not sorted.
pub fn overlap(duration: Duration, a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let (longest, shortest) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut overlaps = Vec::new();
    for x in longest {
        for y in shortest {
            if !is_overlap_possible(x, y) {
                continue;
            }

            // Either endpoint unresolved means a degenerate pair.
            let (Some(start), Some(end)) = (later_start(x, y), earlier_end(x, y)) else {
                continue;
            };

            let length = (end - start).abs();
            if length >= duration {
                overlaps.push(Interval::from_ordered(start.min(end), start.max(end)));
            }
        }
    }

    overlaps
}

fn is_overlap_possible(x: &Interval, y: &Interval) -> bool {
    y.contains_exclusive(x.start())
        || y.contains_exclusive(x.end())
        || x.contains_exclusive(y.start())
        || x.contains_exclusive(y.end())
}

fn later_start(x: &Interval, y: &Interval) -> Option<NaiveTime> {
    if y.contains_inclusive(x.start()) {
        Some(x.start())
    } else if x.contains_inclusive(y.start()) {
        Some(y.start())
    } else {
        None
    }
}

fn earlier_end(x: &Interval, y: &Interval) -> Option<NaiveTime> {
    if y.contains_inclusive(x.end()) {
        Some(x.end())
    } else if x.contains_inclusive(y.end()) {
        Some(y.end())
    } else {
        None
    }
}
