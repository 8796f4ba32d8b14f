use super::animator::{AnimationPhase, StepOutcome, TransitionAnimator, ViewCommand};
use super::config::{ConfigError, StepperConfig};
use super::constants::{HAPTIC_PULSE_MS, NUDGE_PX};
use super::feedback::{FeedbackBackend, FeedbackEmitter, FeedbackError};
use super::gesture::{GestureController, GestureState, HoldSpeed};
use super::timers::{TimerId, TimerKind, TimerQueue};
use super::value::{Direction, ValueStore};
use std::time::Duration;

/// One mounted stepper: value, animation slot, press handling and feedback.
///
/// Single-threaded and clock-free. The host feeds pointer events and elapsed
/// time in; visual changes come back out as [`ViewCommand`]s appended to the
/// caller's buffer.
pub struct Stepper<B: FeedbackBackend> {
    config: StepperConfig,
    animator: TransitionAnimator,
    gestures: GestureController,
    feedback: FeedbackEmitter<B>,
    timers: TimerQueue<TimerKind>,
}

impl<B: FeedbackBackend> Stepper<B> {
    pub fn new(config: StepperConfig, backend: B) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = ValueStore::new(config.initial_value, config.min, config.max);
        let speed = HoldSpeed::new(
            config.hold_start_speed,
            config.hold_min_speed,
            config.hold_acceleration,
        );
        Ok(Self {
            animator: TransitionAnimator::new(store, config.settle),
            gestures: GestureController::new(config.hold_delay, speed),
            feedback: FeedbackEmitter::new(backend, HAPTIC_PULSE_MS),
            timers: TimerQueue::new(),
            config,
        })
    }

    /// Initial paint: current digit and control affordances.
    pub fn mount(&self, out: &mut Vec<ViewCommand>) {
        out.push(ViewCommand::Show {
            value: self.animator.value(),
        });
        out.push(self.animator.affordances());
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.animator.value()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    #[inline]
    pub fn queued_delta(&self) -> i32 {
        self.animator.queued_delta()
    }

    #[inline]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    #[inline]
    pub fn hold_speed(&self) -> Duration {
        self.gestures.hold_speed()
    }

    /// Time since mount on the stepper's own clock.
    #[inline]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn feedback(&self) -> &FeedbackEmitter<B> {
        &self.feedback
    }

    /// Any pointer-down on the page: the first one primes audio.
    pub fn document_pointer_down(&mut self) {
        if let Err(e) = self.feedback.prime_audio_once() {
            log::warn!("[feedback] audio priming failed: {}", e);
        }
    }

    pub fn settle_audio_priming(&mut self, result: Result<(), FeedbackError>) {
        if let Err(e) = self.feedback.settle_priming(result) {
            log::warn!("[feedback] audio priming failed: {}", e);
        }
    }

    /// Pointer-down on a step control.
    pub fn press(&mut self, direction: Direction) {
        self.gestures.press(direction, &mut self.timers);
    }

    /// Pointer-up/leave anywhere on the page.
    pub fn release(&mut self, out: &mut Vec<ViewCommand>) {
        if let Some(direction) = self.gestures.release(&mut self.timers) {
            self.request_step(direction, out);
        }
    }

    pub fn request_step(&mut self, direction: Direction, out: &mut Vec<ViewCommand>) -> StepOutcome {
        let outcome = self.animator.request_step(direction, &mut self.timers, out);
        if outcome == StepOutcome::Started {
            self.emit_feedback();
        }
        outcome
    }

    /// One animation frame: start any pending transition, then run every
    /// timer due within `dt`.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<ViewCommand>) {
        self.animator.on_frame(out);
        self.run_timers(dt, out);
    }

    /// Move the clock by `dt` without treating it as a new frame.
    pub fn run_timers(&mut self, dt: Duration, out: &mut Vec<ViewCommand>) {
        let until = self.timers.now() + dt;
        while let Some((id, kind)) = self.timers.pop_due(until) {
            self.fire(id, kind, out);
        }
        self.timers.advance_to(until);
    }

    /// Release every pending timer and the press in progress, and put the
    /// display back at rest.
    pub fn teardown(&mut self, out: &mut Vec<ViewCommand>) {
        self.gestures.cancel(&mut self.timers);
        self.animator.cancel(&mut self.timers, out);
        if self.timers.has_pending(TimerKind::NudgeRevert) {
            out.push(ViewCommand::Nudge { offset_px: 0.0 });
        }
        self.timers.clear();
    }

    fn fire(&mut self, id: TimerId, kind: TimerKind, out: &mut Vec<ViewCommand>) {
        match kind {
            TimerKind::HoldDelay | TimerKind::Repeat => {
                if let Some(direction) = self.gestures.on_timer(id, &mut self.timers) {
                    self.request_step(direction, out);
                    out.push(ViewCommand::Nudge {
                        offset_px: NUDGE_PX,
                    });
                    self.timers
                        .schedule(self.config.nudge_revert, TimerKind::NudgeRevert);
                }
            }
            TimerKind::NudgeRevert => out.push(ViewCommand::Nudge { offset_px: 0.0 }),
            TimerKind::Settle => {
                if self.animator.on_settle(id, &mut self.timers, out) == Some(StepOutcome::Started) {
                    self.emit_feedback();
                }
            }
        }
    }

    fn emit_feedback(&mut self) {
        if let Err(e) = self.feedback.tick() {
            log::debug!("[feedback] tick dropped: {}", e);
        }
        if let Err(e) = self.feedback.haptic() {
            log::debug!("[feedback] haptic dropped: {}", e);
        }
    }
}
