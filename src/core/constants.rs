// Stepper tuning constants shared by the core and the browser shell.

// Value range
pub const INITIAL_VALUE: i32 = 2;
pub const MIN_VALUE: i32 = 0;
pub const MAX_VALUE: i32 = 99;

// Press timing (milliseconds)
pub const HOLD_DELAY_MS: u64 = 180; // press longer than this becomes a hold
pub const HOLD_START_SPEED_MS: u64 = 280;
pub const HOLD_MIN_SPEED_MS: u64 = 70;
pub const HOLD_ACCELERATION: f64 = 0.85; // repeat interval multiplier per tick

// Animation timing (milliseconds)
pub const SETTLE_MS: u64 = 380;
pub const NUDGE_REVERT_MS: u64 = 60;

// Visuals
pub const SLIDE_PERCENT: f32 = 120.0; // off-screen distance for incoming/outgoing digits
pub const BLUR_PX: f32 = 6.0;
pub const NUDGE_PX: f32 = 0.4; // sub-pixel jiggle on each repeat tick

// Feedback
pub const HAPTIC_PULSE_MS: u32 = 6;
pub const TICK_VOLUME: f64 = 0.18;
pub const TICK_SOUND_URI: &str =
    "data:audio/wav;base64,UklGRiQAAABXQVZFZm10IBAAAAABAAEAESsAACJWAAACABAAZGF0YQAAAAA=";

// DOM hooks
pub const DIGIT_CLASS: &str = "num";
pub const DISABLED_CLASS: &str = "disabled";
