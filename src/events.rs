use crate::frame::FrameContext;
use crate::core::Direction;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Listener {
    fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Pointer wiring for one widget: press on either control, release anywhere
/// on the page, and the page's first pointer-down for audio priming.
pub fn wire_pointer_handlers(
    document: &web::Document,
    ctx: &Rc<RefCell<FrameContext>>,
) -> Vec<Listener> {
    let (minus, plus) = {
        let c = ctx.borrow();
        (c.view.minus().clone(), c.view.plus().clone())
    };
    let doc: &web::EventTarget = document.as_ref();

    let mut listeners = Vec::with_capacity(5);
    listeners.push(wire_press(&minus, ctx, Direction::Decrement));
    listeners.push(wire_press(&plus, ctx, Direction::Increment));

    let prime_ctx = ctx.clone();
    listeners.push(Listener::attach(doc, "pointerdown", move |_ev| {
        prime_ctx.borrow_mut().stepper.document_pointer_down();
    }));

    for event in ["pointerup", "pointerleave"] {
        let release_ctx = ctx.clone();
        listeners.push(Listener::attach(doc, event, move |_ev| {
            release_ctx.borrow_mut().release();
        }));
    }
    listeners
}

fn wire_press(
    control: &web::HtmlElement,
    ctx: &Rc<RefCell<FrameContext>>,
    direction: Direction,
) -> Listener {
    let ctx = ctx.clone();
    Listener::attach(control.as_ref(), "pointerdown", move |_ev| {
        log::debug!("[pointer] press {:?}", direction);
        ctx.borrow_mut().press(direction);
    })
}
