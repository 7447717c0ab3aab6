//! Tests for free-time derivation.

use slot_engine::{derive_free, Interval, Participant, ScheduleError};

fn iv(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).unwrap()
}

fn rendered(intervals: &[Interval]) -> Vec<String> {
    intervals.iter().map(|i| i.to_string()).collect()
}

#[test]
fn john_free_time() {
    let busy = vec![iv("9:00", "10:30"), iv("12:00", "13:00"), iv("16:00", "18:00")];
    let free = derive_free(&busy, iv("8:00", "18:00")).unwrap();
    assert_eq!(
        rendered(&free),
        ["{08:00, 09:00}", "{10:30, 12:00}", "{13:00, 16:00}"]
    );
}

#[test]
fn back_to_back_meetings_leave_no_gap() {
    // Annie: 12:30-14:30 and 14:30-15:00 touch, and her day starts with a meeting.
    let busy = vec![
        iv("10:00", "11:30"),
        iv("12:30", "14:30"),
        iv("14:30", "15:00"),
        iv("16:00", "17:00"),
    ];
    let free = derive_free(&busy, iv("10:00", "18:30")).unwrap();
    assert_eq!(
        rendered(&free),
        ["{11:30, 12:30}", "{15:00, 16:00}", "{17:00, 18:30}"]
    );
}

#[test]
fn meetings_filling_the_day_leave_nothing_free() {
    let busy = vec![iv("8:00", "12:00"), iv("12:00", "18:00")];
    let free = derive_free(&busy, iv("8:00", "18:00")).unwrap();
    assert!(free.is_empty());
}

#[test]
fn gaps_are_clipped_to_daily_bounds() {
    // First meeting starts before the day does; the last ends after it.
    let busy = vec![iv("7:00", "8:00"), iv("12:00", "13:00"), iv("17:00", "19:00")];
    let free = derive_free(&busy, iv("9:00", "18:00")).unwrap();
    assert_eq!(rendered(&free), ["{09:00, 12:00}", "{13:00, 17:00}"]);
}

#[test]
fn gap_entirely_outside_bounds_is_dropped() {
    let busy = vec![iv("6:00", "7:00"), iv("7:30", "8:00"), iv("12:00", "13:00")];
    let free = derive_free(&busy, iv("9:00", "18:00")).unwrap();
    assert_eq!(rendered(&free), ["{09:00, 12:00}", "{13:00, 18:00}"]);
}

#[test]
fn empty_busy_list_is_rejected() {
    let err = derive_free(&[], iv("8:00", "18:00")).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput(_)));
}

#[test]
fn unsorted_busy_list_is_rejected() {
    let busy = vec![iv("12:00", "13:00"), iv("9:00", "10:00")];
    let err = derive_free(&busy, iv("8:00", "18:00")).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput(_)));
}

#[test]
fn overlapping_busy_list_is_rejected() {
    let busy = vec![iv("9:00", "11:00"), iv("10:00", "12:00")];
    let err = derive_free(&busy, iv("8:00", "18:00")).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput(_)));
}

#[test]
fn participant_keeps_inputs_and_derived_free_time() {
    let busy = vec![iv("9:00", "10:00")];
    let bounds = iv("8:00", "12:00");
    let participant = Participant::new(busy.clone(), bounds).unwrap();

    assert_eq!(participant.bounds(), bounds);
    assert_eq!(participant.busy(), busy.as_slice());
    assert_eq!(
        rendered(participant.free()),
        ["{08:00, 09:00}", "{10:00, 12:00}"]
    );
}
