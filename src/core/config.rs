use super::constants::*;
use std::time::Duration;

/// Tunables for one stepper instance.
///
/// `Default` reproduces the stock widget: value 2 in [0, 99], a 180 ms
/// tap/hold threshold, repeats accelerating from 280 ms down to 70 ms and a
/// 380 ms settle window per digit swap.
#[derive(Clone, Debug, PartialEq)]
pub struct StepperConfig {
    pub initial_value: i32,
    pub min: i32,
    pub max: i32,
    pub hold_delay: Duration,
    pub hold_start_speed: Duration,
    pub hold_min_speed: Duration,
    pub hold_acceleration: f64,
    pub settle: Duration,
    pub nudge_revert: Duration,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            initial_value: INITIAL_VALUE,
            min: MIN_VALUE,
            max: MAX_VALUE,
            hold_delay: Duration::from_millis(HOLD_DELAY_MS),
            hold_start_speed: Duration::from_millis(HOLD_START_SPEED_MS),
            hold_min_speed: Duration::from_millis(HOLD_MIN_SPEED_MS),
            hold_acceleration: HOLD_ACCELERATION,
            settle: Duration::from_millis(SETTLE_MS),
            nudge_revert: Duration::from_millis(NUDGE_REVERT_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty range: min {min} is above max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("initial value {value} is outside [{min}, {max}]")]
    InitialOutOfRange { value: i32, min: i32, max: i32 },
    #[error("hold acceleration {0} must be in (0, 1]")]
    Acceleration(f64),
    #[error("hold speeds must be non-zero with start >= floor (start {start:?}, floor {floor:?})")]
    HoldSpeeds { start: Duration, floor: Duration },
    #[error("settle duration must be non-zero")]
    ZeroSettle,
}

impl StepperConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.min..=self.max).contains(&self.initial_value) {
            return Err(ConfigError::InitialOutOfRange {
                value: self.initial_value,
                min: self.min,
                max: self.max,
            });
        }
        // NaN fails both comparisons
        if !(self.hold_acceleration > 0.0 && self.hold_acceleration <= 1.0) {
            return Err(ConfigError::Acceleration(self.hold_acceleration));
        }
        if self.hold_min_speed.is_zero() || self.hold_start_speed < self.hold_min_speed {
            return Err(ConfigError::HoldSpeeds {
                start: self.hold_start_speed,
                floor: self.hold_min_speed,
            });
        }
        if self.settle.is_zero() {
            return Err(ConfigError::ZeroSettle);
        }
        Ok(())
    }
}
