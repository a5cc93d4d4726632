use crate::FramePacer;

use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(83);

/// WHAT: The first tick is one interval after start
/// WHY: Ticks run at a fixed rate from the moment the window opens
#[test]
fn given_new_pacer_when_checking_then_due_after_one_interval() {
    let start = Instant::now();
    let pacer = FramePacer::new(INTERVAL, start);

    assert_eq!(pacer.deadline(), start + INTERVAL);
    assert!(!pacer.is_due(start));
    assert!(pacer.is_due(start + INTERVAL));
}

/// WHAT: On-time ticks advance by exactly one interval
/// WHY: Small scheduling jitter must not accumulate drift
#[test]
fn given_slightly_late_tick_when_advancing_then_schedule_kept() {
    let start = Instant::now();
    let mut pacer = FramePacer::new(INTERVAL, start);

    pacer.advance(start + INTERVAL + Duration::from_millis(5));

    assert_eq!(pacer.deadline(), start + INTERVAL * 2);
}

/// WHAT: A stalled loop skips missed frames
/// WHY: Catching up in a burst would append several samples at once
#[test]
fn given_stalled_tick_when_advancing_then_next_deadline_one_interval_out() {
    let start = Instant::now();
    let mut pacer = FramePacer::new(INTERVAL, start);
    let late = start + INTERVAL * 5;

    pacer.advance(late);

    assert_eq!(pacer.deadline(), late + INTERVAL);
    assert!(!pacer.is_due(late));
}
