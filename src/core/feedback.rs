#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("audio playback blocked: {0}")]
    AudioBlocked(String),
    #[error("audio unavailable")]
    AudioUnavailable,
    #[error("vibration unsupported")]
    HapticUnsupported,
}

/// Result of asking the platform to prime audio playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priming {
    /// Playback is usable right away.
    Unlocked,
    /// The platform answers later; report it with
    /// [`FeedbackEmitter::settle_priming`].
    Deferred,
}

/// Audio/haptic capabilities the widget calls through.
pub trait FeedbackBackend {
    /// Play and immediately pause/rewind the tick so later plays are allowed.
    fn prime_audio(&mut self) -> Result<Priming, FeedbackError>;
    /// Rewind the tick sample and play it.
    fn play_tick(&mut self) -> Result<(), FeedbackError>;
    fn vibrate(&mut self, pulse_ms: u32) -> Result<(), FeedbackError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioUnlock {
    Locked,
    Priming,
    Unlocked,
    Failed,
}

/// Tick + haptic feedback with a one-time audio unlock.
///
/// Priming is attempted at most once per emitter. A failed prime is final:
/// ticks stay silent for the lifetime of the widget.
pub struct FeedbackEmitter<B> {
    backend: B,
    unlock: AudioUnlock,
    haptic_ms: u32,
}

impl<B: FeedbackBackend> FeedbackEmitter<B> {
    pub fn new(backend: B, haptic_ms: u32) -> Self {
        Self {
            backend,
            unlock: AudioUnlock::Locked,
            haptic_ms,
        }
    }

    #[inline]
    pub fn unlock_state(&self) -> AudioUnlock {
        self.unlock
    }

    #[inline]
    pub fn audio_unlocked(&self) -> bool {
        self.unlock == AudioUnlock::Unlocked
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn prime_audio_once(&mut self) -> Result<(), FeedbackError> {
        if self.unlock != AudioUnlock::Locked {
            return Ok(());
        }
        match self.backend.prime_audio() {
            Ok(Priming::Unlocked) => {
                self.unlock = AudioUnlock::Unlocked;
                log::info!("[feedback] audio unlocked");
                Ok(())
            }
            Ok(Priming::Deferred) => {
                self.unlock = AudioUnlock::Priming;
                Ok(())
            }
            Err(e) => {
                self.unlock = AudioUnlock::Failed;
                Err(e)
            }
        }
    }

    /// Completes a deferred prime. Ignored unless a prime is in flight.
    pub fn settle_priming(&mut self, result: Result<(), FeedbackError>) -> Result<(), FeedbackError> {
        if self.unlock != AudioUnlock::Priming {
            return Ok(());
        }
        match result {
            Ok(()) => {
                self.unlock = AudioUnlock::Unlocked;
                log::info!("[feedback] audio unlocked");
                Ok(())
            }
            Err(e) => {
                self.unlock = AudioUnlock::Failed;
                Err(e)
            }
        }
    }

    /// Silent no-op until audio is unlocked.
    pub fn tick(&mut self) -> Result<(), FeedbackError> {
        if !self.audio_unlocked() {
            return Ok(());
        }
        self.backend.play_tick()
    }

    pub fn haptic(&mut self) -> Result<(), FeedbackError> {
        self.backend.vibrate(self.haptic_ms)
    }
}
