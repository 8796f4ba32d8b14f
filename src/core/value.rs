/// Which way a step moves the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Decrement,
    Increment,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Direction::Decrement => -1,
            Direction::Increment => 1,
        }
    }

    /// Direction of a non-zero signed amount.
    #[inline]
    pub fn of(amount: i32) -> Option<Self> {
        match amount.signum() {
            -1 => Some(Direction::Decrement),
            1 => Some(Direction::Increment),
            _ => None,
        }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        self.delta() as f32
    }
}

/// Bounded integer behind the widget.
#[derive(Clone, Debug)]
pub struct ValueStore {
    value: i32,
    min: i32,
    max: i32,
}

impl ValueStore {
    /// `value` is clamped into `[min, max]`; callers validate the config first.
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        Self {
            value: value.clamp(min, max.max(min)),
            min,
            max: max.max(min),
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    #[inline]
    pub fn can_step(&self, direction: Direction) -> bool {
        match direction {
            Direction::Decrement => self.value > self.min,
            Direction::Increment => self.value < self.max,
        }
    }

    /// Apply one step; returns false and leaves the value alone at a bound.
    pub fn try_step(&mut self, direction: Direction) -> bool {
        if !self.can_step(direction) {
            return false;
        }
        self.value += direction.delta();
        true
    }
}
