use smallvec::SmallVec;
use std::time::Duration;

/// What a pending timer is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    HoldDelay,
    Repeat,
    NudgeRevert,
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct Pending<K> {
    id: TimerId,
    due: Duration,
    kind: K,
}

/// One-shot timers on a virtual clock.
///
/// Nothing here reads wall time: the owner moves the clock forward with
/// [`TimerQueue::pop_due`] and [`TimerQueue::advance_to`]. Repetition is
/// done by rescheduling from inside the handler of the timer that fired.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    now: Duration,
    next_id: u64,
    pending: SmallVec<[Pending<K>; 4]>,
}

impl<K: Copy> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: SmallVec::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            kind,
        });
        id
    }

    /// Returns whether the timer was still pending. Cancelling twice is fine.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|p| p.id == id) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn has_pending(&self, kind: K) -> bool
    where
        K: PartialEq,
    {
        self.pending.iter().any(|p| p.kind == kind)
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove the earliest timer due at or before `until` and move the clock
    /// to its deadline. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, K)> {
        let (i, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))?;
        let fired = self.pending.remove(i);
        self.now = self.now.max(fired.due);
        Some((fired.id, fired.kind))
    }

    /// Move the clock forward; never backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
