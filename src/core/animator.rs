use super::constants::SLIDE_PERCENT;
use super::timers::{TimerId, TimerKind, TimerQueue};
use super::value::{Direction, ValueStore};
use std::time::Duration;

/// DOM-free description of what the display should do next.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCommand {
    /// Show `value` in the resting digit without animation.
    Show { value: i32 },
    /// Add a new digit off-screen on the side `direction` points to.
    InsertIncoming { value: i32, direction: Direction },
    /// Slide the outgoing digit away and the incoming one to rest.
    BeginTransition { direction: Direction },
    RemoveOutgoing,
    /// Horizontal offset of the whole display, in px. 0 is rest.
    Nudge { offset_px: f32 },
    Affordances { can_decrement: bool, can_increment: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    /// Incoming digit placed; waiting for the next frame to start moving.
    Inserted(Direction),
    Transitioning(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Started,
    Queued,
    Rejected,
}

/// Horizontal offset (percent of digit width) of the incoming digit before
/// it moves in, or of the outgoing digit once it has moved out.
#[inline]
pub fn slide_offset_percent(direction: Direction, outgoing: bool) -> f32 {
    let offset = direction.sign() * SLIDE_PERCENT;
    if outgoing {
        -offset
    } else {
        offset
    }
}

/// Serializes value changes into one digit swap at a time.
///
/// Requests arriving mid-swap are summed into a signed queue which drains one
/// unit per settle. Bounds are checked against the committed value both when
/// queueing and when a queued unit is drained; a unit rejected at drain time
/// is consumed and the remainder keeps waiting for the next settle.
pub struct TransitionAnimator {
    store: ValueStore,
    phase: AnimationPhase,
    queued_delta: i32,
    settle: Duration,
    settle_timer: Option<TimerId>,
}

impl TransitionAnimator {
    pub fn new(store: ValueStore, settle: Duration) -> Self {
        Self {
            store,
            phase: AnimationPhase::Idle,
            queued_delta: 0,
            settle,
            settle_timer: None,
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.store.value()
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase != AnimationPhase::Idle
    }

    #[inline]
    pub fn queued_delta(&self) -> i32 {
        self.queued_delta
    }

    pub fn affordances(&self) -> ViewCommand {
        ViewCommand::Affordances {
            can_decrement: self.store.can_step(Direction::Decrement),
            can_increment: self.store.can_step(Direction::Increment),
        }
    }

    pub fn request_step(
        &mut self,
        direction: Direction,
        timers: &mut TimerQueue<TimerKind>,
        out: &mut Vec<ViewCommand>,
    ) -> StepOutcome {
        if !self.store.can_step(direction) {
            log::debug!("[animator] {:?} rejected at {}", direction, self.store.value());
            return StepOutcome::Rejected;
        }
        if self.is_animating() {
            self.queued_delta += direction.delta();
            log::debug!("[animator] queued {:?}, pending {}", direction, self.queued_delta);
            return StepOutcome::Queued;
        }
        if !self.store.try_step(direction) {
            return StepOutcome::Rejected;
        }

        self.phase = AnimationPhase::Inserted(direction);
        out.push(ViewCommand::InsertIncoming {
            value: self.store.value(),
            direction,
        });
        out.push(self.affordances());
        self.settle_timer = Some(timers.schedule(self.settle, TimerKind::Settle));
        StepOutcome::Started
    }

    /// Animation-frame callback: starts the transition of a freshly inserted digit.
    pub fn on_frame(&mut self, out: &mut Vec<ViewCommand>) {
        if let AnimationPhase::Inserted(direction) = self.phase {
            self.phase = AnimationPhase::Transitioning(direction);
            out.push(ViewCommand::BeginTransition { direction });
        }
    }

    /// Settle-timer callback. Returns the outcome of the drained unit, if any.
    pub fn on_settle(
        &mut self,
        id: TimerId,
        timers: &mut TimerQueue<TimerKind>,
        out: &mut Vec<ViewCommand>,
    ) -> Option<StepOutcome> {
        if self.settle_timer != Some(id) {
            return None;
        }
        self.settle_timer = None;
        // settle can beat the frame when the clock jumps
        self.on_frame(out);
        out.push(ViewCommand::RemoveOutgoing);
        self.phase = AnimationPhase::Idle;

        let unit = Direction::of(self.queued_delta)?;
        self.queued_delta -= unit.delta();
        log::debug!("[animator] draining {:?}, {} left", unit, self.queued_delta);
        Some(self.request_step(unit, timers, out))
    }

    /// Drop the in-flight settle timer and finish the swap on the spot so no
    /// outgoing digit is left behind.
    pub fn cancel(&mut self, timers: &mut TimerQueue<TimerKind>, out: &mut Vec<ViewCommand>) {
        if let Some(id) = self.settle_timer.take() {
            timers.cancel(id);
        }
        if self.is_animating() {
            self.on_frame(out);
            out.push(ViewCommand::RemoveOutgoing);
        }
        self.phase = AnimationPhase::Idle;
    }
}
