pub mod animator;
pub mod config;
pub mod constants;
pub mod feedback;
pub mod gesture;
pub mod stepper;
pub mod timers;
pub mod value;

pub use animator::{AnimationPhase, StepOutcome, ViewCommand};
pub use config::{ConfigError, StepperConfig};
pub use feedback::{AudioUnlock, FeedbackBackend, FeedbackEmitter, FeedbackError, Priming};
pub use gesture::GestureState;
pub use stepper::Stepper;
pub use value::Direction;
