use crate::core::constants::{TICK_SOUND_URI, TICK_VOLUME};
use crate::core::{FeedbackBackend, FeedbackError, Priming};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Outcome of the async audio prime, picked up by the frame loop.
pub type PrimingSlot = Rc<RefCell<Option<Result<(), FeedbackError>>>>;

/// Browser tick sample + `navigator.vibrate`.
pub struct WebFeedback {
    tick: web::HtmlAudioElement,
    priming: PrimingSlot,
}

impl WebFeedback {
    pub fn new(priming: PrimingSlot) -> anyhow::Result<Self> {
        let tick = web::HtmlAudioElement::new_with_src(TICK_SOUND_URI)
            .map_err(|e| anyhow::anyhow!("tick audio element: {:?}", e))?;
        tick.set_volume(TICK_VOLUME);
        Ok(Self { tick, priming })
    }
}

fn blocked(e: JsValue) -> FeedbackError {
    FeedbackError::AudioBlocked(format!("{:?}", e))
}

impl FeedbackBackend for WebFeedback {
    fn prime_audio(&mut self) -> Result<Priming, FeedbackError> {
        let promise = self.tick.play().map_err(blocked)?;
        let tick = self.tick.clone();
        let slot = self.priming.clone();
        spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => {
                    _ = tick.pause();
                    tick.set_current_time(0.0);
                    Ok(())
                }
                Err(e) => Err(blocked(e)),
            };
            *slot.borrow_mut() = Some(outcome);
        });
        Ok(Priming::Deferred)
    }

    fn play_tick(&mut self) -> Result<(), FeedbackError> {
        self.tick.set_current_time(0.0);
        let promise = self.tick.play().map_err(blocked)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] tick rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn vibrate(&mut self, pulse_ms: u32) -> Result<(), FeedbackError> {
        let navigator = web::window()
            .ok_or(FeedbackError::HapticUnsupported)?
            .navigator();
        // navigator.vibrate is missing on some engines
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
        if supported && navigator.vibrate_with_duration(pulse_ms) {
            Ok(())
        } else {
            Err(FeedbackError::HapticUnsupported)
        }
    }
}
