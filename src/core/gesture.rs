use super::timers::{TimerId, TimerKind, TimerQueue};
use super::value::Direction;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    /// Pressed, hold threshold not reached yet.
    Pending,
    Repeating,
}

/// Repeat interval that shrinks geometrically towards a floor.
#[derive(Clone, Copy, Debug)]
pub struct HoldSpeed {
    current: Duration,
    start: Duration,
    floor: Duration,
    factor: f64,
}

impl HoldSpeed {
    pub fn new(start: Duration, floor: Duration, factor: f64) -> Self {
        Self {
            current: start,
            start,
            floor,
            factor,
        }
    }

    #[inline]
    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// Shrink the interval and return the new value.
    pub fn decay(&mut self) -> Duration {
        self.current = self.current.mul_f64(self.factor).max(self.floor);
        self.current
    }
}

#[derive(Clone, Copy, Debug)]
struct PressSession {
    direction: Direction,
    did_hold: bool,
    hold_timer: Option<TimerId>,
    repeat_timer: Option<TimerId>,
}

impl PressSession {
    fn cancel(&mut self, timers: &mut TimerQueue<TimerKind>) {
        if let Some(id) = self.hold_timer.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.repeat_timer.take() {
            timers.cancel(id);
        }
    }
}

/// Turns press/release into a single tap step or an accelerating repeat.
pub struct GestureController {
    session: Option<PressSession>,
    speed: HoldSpeed,
    hold_delay: Duration,
}

impl GestureController {
    pub fn new(hold_delay: Duration, speed: HoldSpeed) -> Self {
        Self {
            session: None,
            speed,
            hold_delay,
        }
    }

    pub fn state(&self) -> GestureState {
        match self.session {
            None => GestureState::Idle,
            Some(s) if s.did_hold => GestureState::Repeating,
            Some(_) => GestureState::Pending,
        }
    }

    #[inline]
    pub fn hold_speed(&self) -> Duration {
        self.speed.current()
    }

    pub fn press(&mut self, direction: Direction, timers: &mut TimerQueue<TimerKind>) {
        // a press without release in between replaces the stale session
        if let Some(mut stale) = self.session.take() {
            stale.cancel(timers);
        }
        let hold_timer = timers.schedule(self.hold_delay, TimerKind::HoldDelay);
        self.session = Some(PressSession {
            direction,
            did_hold: false,
            hold_timer: Some(hold_timer),
            repeat_timer: None,
        });
    }

    /// Hold-delay or repeat timer fired. Returns the direction to step in and
    /// schedules the next repeat.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue<TimerKind>) -> Option<Direction> {
        let session = self.session.as_mut()?;
        if session.hold_timer == Some(id) {
            session.hold_timer = None;
            session.did_hold = true;
            self.speed.reset();
        } else if session.repeat_timer == Some(id) {
            session.repeat_timer = None;
        } else {
            return None;
        }
        let next = self.speed.decay();
        session.repeat_timer = Some(timers.schedule(next, TimerKind::Repeat));
        Some(session.direction)
    }

    /// End of press. Returns the tap step if the press never became a hold.
    /// Calling it again without a new press does nothing.
    pub fn release(&mut self, timers: &mut TimerQueue<TimerKind>) -> Option<Direction> {
        let mut session = self.session.take()?;
        session.cancel(timers);
        (!session.did_hold).then_some(session.direction)
    }

    pub fn cancel(&mut self, timers: &mut TimerQueue<TimerKind>) {
        if let Some(mut session) = self.session.take() {
            session.cancel(timers);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(d: Duration) -> f64 {
        d.as_secs_f64() * 1000.0
    }

    #[test]
    fn hold_speed_decays_to_floor() {
        let mut speed = HoldSpeed::new(Duration::from_millis(280), Duration::from_millis(70), 0.85);
        let mut prev = speed.current();
        let mut seen = Vec::new();
        for _ in 0..20 {
            let next = speed.decay();
            assert!(next <= prev);
            seen.push(ms(next));
            prev = next;
        }
        assert!((seen[0] - 238.0).abs() < 1e-3);
        assert!((seen[1] - 202.3).abs() < 1e-3);
        assert!((seen[8] - 70.0).abs() < 1e-6, "got {}", seen[8]);
        assert_eq!(speed.current(), Duration::from_millis(70));

        speed.reset();
        assert_eq!(speed.current(), Duration::from_millis(280));
    }

    #[test]
    fn stale_timer_ids_are_ignored() {
        let mut timers = TimerQueue::new();
        let mut gestures = GestureController::new(
            Duration::from_millis(180),
            HoldSpeed::new(Duration::from_millis(280), Duration::from_millis(70), 0.85),
        );
        let foreign = timers.schedule(Duration::from_millis(5), TimerKind::Settle);
        gestures.press(Direction::Increment, &mut timers);
        assert_eq!(gestures.on_timer(foreign, &mut timers), None);
        assert_eq!(gestures.state(), GestureState::Pending);
    }
}
