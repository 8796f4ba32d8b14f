#![cfg(target_arch = "wasm32")]
use crate::core::{Stepper, StepperConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
pub mod core;
mod dom;
mod events;
mod frame;
mod view;

// Markup used by the stock page
const DEFAULT_DISPLAY_ID: &str = "wheelNumber";
const DEFAULT_MINUS_SELECTOR: &str = ".minus";
const DEFAULT_PLUS_SELECTOR: &str = ".plus";

thread_local! {
    static PAGE_WIDGET: RefCell<Option<StepperWidget>> = const { RefCell::new(None) };
}

/// A mounted stepper. Dropping it (or calling `free()` from JS) stops its
/// frame loop, removes its listeners and cancels its timers.
#[wasm_bindgen]
pub struct StepperWidget {
    ctx: Rc<RefCell<frame::FrameContext>>,
    listeners: Vec<events::Listener>,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl StepperWidget {
    /// Mount onto a display element (by id) and two controls (by selector).
    #[wasm_bindgen(constructor)]
    pub fn new(
        display_id: &str,
        minus_selector: &str,
        plus_selector: &str,
    ) -> Result<StepperWidget, JsValue> {
        mount(display_id, minus_selector, plus_selector, StepperConfig::default())
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn value(&self) -> i32 {
        self.ctx.borrow().stepper.value()
    }
}

impl Drop for StepperWidget {
    fn drop(&mut self) {
        self.frame_loop.take();
        self.listeners.clear();
        self.ctx.borrow_mut().teardown();
        log::info!("[widget] unmounted");
    }
}

fn mount(
    display_id: &str,
    minus_selector: &str,
    plus_selector: &str,
    config: StepperConfig,
) -> anyhow::Result<StepperWidget> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let display = dom::element_by_id(&document, display_id)?;
    let minus = dom::element_by_selector(&document, minus_selector)?;
    let plus = dom::element_by_selector(&document, plus_selector)?;

    let priming: audio::PrimingSlot = Rc::new(RefCell::new(None));
    let feedback = audio::WebFeedback::new(priming.clone())?;
    let stepper = Stepper::new(config, feedback)?;

    let view = view::DigitView::new(document.clone(), display, minus, plus);
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(stepper, view, priming)));
    ctx.borrow_mut().mount();

    let listeners = events::wire_pointer_handlers(&document, &ctx);
    let frame_loop = frame::start_loop(ctx.clone());
    log::info!("[widget] mounted on #{}", display_id);
    Ok(StepperWidget {
        ctx,
        listeners,
        frame_loop: Some(frame_loop),
    })
}

fn page_has_default_markup(document: &web::Document) -> bool {
    document.get_element_by_id(DEFAULT_DISPLAY_ID).is_some()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wheel-stepper starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if !page_has_default_markup(&document) {
        return Ok(());
    }
    match mount(
        DEFAULT_DISPLAY_ID,
        DEFAULT_MINUS_SELECTOR,
        DEFAULT_PLUS_SELECTOR,
        StepperConfig::default(),
    ) {
        Ok(widget) => PAGE_WIDGET.with(|w| *w.borrow_mut() = Some(widget)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}
