use crate::audio::{PrimingSlot, WebFeedback};
use crate::core::{Direction, Stepper, ViewCommand};
use crate::view::DigitView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub stepper: Stepper<WebFeedback>,
    pub view: DigitView,
    pub priming: PrimingSlot,
    pub last_instant: Instant,
    commands: Vec<ViewCommand>,
}

impl FrameContext {
    pub fn new(stepper: Stepper<WebFeedback>, view: DigitView, priming: PrimingSlot) -> Self {
        Self {
            stepper,
            view,
            priming,
            last_instant: Instant::now(),
            commands: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        self.stepper.mount(&mut self.commands);
        self.flush();
    }

    pub fn frame(&mut self) {
        if let Some(result) = self.priming.borrow_mut().take() {
            self.stepper.settle_audio_priming(result);
        }
        let dt = self.elapsed();
        self.stepper.advance(dt, &mut self.commands);
        self.flush();
    }

    pub fn teardown(&mut self) {
        self.stepper.teardown(&mut self.commands);
        self.flush();
    }

    pub fn press(&mut self, direction: Direction) {
        self.catch_up();
        self.stepper.press(direction);
    }

    pub fn release(&mut self) {
        self.catch_up();
        self.stepper.release(&mut self.commands);
        self.flush();
    }

    // Bring the stepper clock to "now" between frames so press timing is exact.
    fn catch_up(&mut self) {
        let dt = self.elapsed();
        self.stepper.run_timers(dt, &mut self.commands);
        self.flush();
    }

    fn elapsed(&mut self) -> std::time::Duration {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        dt
    }

    fn flush(&mut self) {
        for cmd in self.commands.drain(..) {
            self.view.apply(&cmd);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop; cancelled when dropped.
pub struct FrameLoop {
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(h), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(h);
        }
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let w = web::window()?;
    let cb = callback.borrow();
    w.request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let callback_weak = Rc::downgrade(&callback);
    let handle_tick = handle.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = callback_weak.upgrade() {
            handle_tick.set(request_frame(&cb));
        }
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&callback));
    FrameLoop { callback, handle }
}
