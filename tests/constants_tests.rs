// Host-side tests for tuning constants and config validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::*;
use constants::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(MIN_VALUE < MAX_VALUE);
    assert!((MIN_VALUE..=MAX_VALUE).contains(&INITIAL_VALUE));

    // the hold threshold separates taps from holds and must beat the first repeat
    assert!(HOLD_DELAY_MS < HOLD_START_SPEED_MS);
    assert!(HOLD_MIN_SPEED_MS < HOLD_START_SPEED_MS);
    assert!(HOLD_ACCELERATION > 0.0 && HOLD_ACCELERATION < 1.0);

    // the nudge must revert well inside the fastest repeat
    assert!(NUDGE_REVERT_MS < HOLD_MIN_SPEED_MS);
    assert!(NUDGE_PX > 0.0 && NUDGE_PX < 1.0);

    assert!(SLIDE_PERCENT >= 100.0);
    assert!(TICK_VOLUME > 0.0 && TICK_VOLUME <= 1.0);
    assert!(TICK_SOUND_URI.starts_with("data:audio/wav;base64,"));
}

#[test]
fn default_config_mirrors_constants() {
    let c = StepperConfig::default();
    assert_eq!(c.initial_value, 2);
    assert_eq!((c.min, c.max), (0, 99));
    assert_eq!(c.hold_delay, Duration::from_millis(180));
    assert_eq!(c.hold_start_speed, Duration::from_millis(280));
    assert_eq!(c.hold_min_speed, Duration::from_millis(70));
    assert_eq!(c.settle, Duration::from_millis(380));
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn validation_catches_bad_configs() {
    let base = StepperConfig::default();

    let c = StepperConfig { min: 10, max: 5, ..base.clone() };
    assert_eq!(c.validate(), Err(ConfigError::EmptyRange { min: 10, max: 5 }));

    let c = StepperConfig { initial_value: -1, ..base.clone() };
    assert!(matches!(c.validate(), Err(ConfigError::InitialOutOfRange { value: -1, .. })));

    let c = StepperConfig { hold_acceleration: 1.5, ..base.clone() };
    assert_eq!(c.validate(), Err(ConfigError::Acceleration(1.5)));

    let c = StepperConfig { hold_acceleration: f64::NAN, ..base.clone() };
    assert!(matches!(c.validate(), Err(ConfigError::Acceleration(_))));

    let c = StepperConfig {
        hold_min_speed: Duration::from_millis(300),
        ..base.clone()
    };
    assert!(matches!(c.validate(), Err(ConfigError::HoldSpeeds { .. })));

    let c = StepperConfig { settle: Duration::ZERO, ..base };
    assert_eq!(c.validate(), Err(ConfigError::ZeroSettle));
}
