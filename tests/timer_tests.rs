// Host-side tests for the virtual-clock timer queue.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timers {
    include!("../src/core/timers.rs");
}

use std::time::Duration;
use timers::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn timers_fire_in_deadline_order() {
    let mut q = TimerQueue::new();
    q.schedule(ms(380), TimerKind::Settle);
    q.schedule(ms(60), TimerKind::NudgeRevert);
    q.schedule(ms(180), TimerKind::HoldDelay);

    let mut fired = Vec::new();
    while let Some((_, kind)) = q.pop_due(ms(1000)) {
        fired.push((kind, q.now()));
    }
    assert_eq!(
        fired,
        vec![
            (TimerKind::NudgeRevert, ms(60)),
            (TimerKind::HoldDelay, ms(180)),
            (TimerKind::Settle, ms(380)),
        ]
    );
    assert!(q.is_empty());
}

#[test]
fn ties_fire_in_scheduling_order() {
    let mut q = TimerQueue::new();
    let a = q.schedule(ms(50), TimerKind::Repeat);
    let b = q.schedule(ms(50), TimerKind::Settle);
    assert_eq!(q.pop_due(ms(50)).map(|(id, _)| id), Some(a));
    assert_eq!(q.pop_due(ms(50)).map(|(id, _)| id), Some(b));
}

#[test]
fn timers_not_yet_due_stay_pending() {
    let mut q = TimerQueue::new();
    q.schedule(ms(100), TimerKind::Repeat);
    assert_eq!(q.pop_due(ms(99)), None);
    q.advance_to(ms(99));
    assert_eq!(q.now(), ms(99));
    assert_eq!(q.next_due(), Some(ms(100)));
}

#[test]
fn rescheduling_is_relative_to_fire_time() {
    let mut q = TimerQueue::new();
    q.schedule(ms(180), TimerKind::HoldDelay);
    let (_, _) = q.pop_due(ms(500)).unwrap();
    q.schedule(ms(238), TimerKind::Repeat);
    assert_eq!(q.next_due(), Some(ms(418)));
}

#[test]
fn cancel_is_idempotent() {
    let mut q = TimerQueue::new();
    let id = q.schedule(ms(10), TimerKind::Repeat);
    assert!(q.cancel(id));
    assert!(!q.cancel(id));
    assert_eq!(q.pop_due(ms(100)), None);
}

#[test]
fn clock_never_runs_backwards() {
    let mut q: TimerQueue<TimerKind> = TimerQueue::new();
    q.advance_to(ms(200));
    q.advance_to(ms(100));
    assert_eq!(q.now(), ms(200));
}

#[test]
fn has_pending_tracks_kind_until_fired_or_cancelled() {
    let mut q = TimerQueue::new();
    let id = q.schedule(ms(60), TimerKind::NudgeRevert);
    q.schedule(ms(380), TimerKind::Settle);
    assert!(q.has_pending(TimerKind::NudgeRevert));
    assert!(!q.has_pending(TimerKind::Repeat));

    q.cancel(id);
    assert!(!q.has_pending(TimerKind::NudgeRevert));
    q.pop_due(ms(400));
    assert!(!q.has_pending(TimerKind::Settle));
}
