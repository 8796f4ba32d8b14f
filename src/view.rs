use crate::core::animator::slide_offset_percent;
use crate::core::constants::{BLUR_PX, DIGIT_CLASS, DISABLED_CLASS};
use crate::core::ViewCommand;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The widget's DOM: a display holding one or two `.num` digits plus the
/// two step controls.
pub struct DigitView {
    document: web::Document,
    display: web::HtmlElement,
    minus: web::HtmlElement,
    plus: web::HtmlElement,
    current: Option<web::HtmlElement>,
    outgoing: Option<web::HtmlElement>,
}

impl DigitView {
    pub fn new(
        document: web::Document,
        display: web::HtmlElement,
        minus: web::HtmlElement,
        plus: web::HtmlElement,
    ) -> Self {
        let current = display
            .query_selector(&format!(".{}", DIGIT_CLASS))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        Self {
            document,
            display,
            minus,
            plus,
            current,
            outgoing: None,
        }
    }

    pub fn minus(&self) -> &web::HtmlElement {
        &self.minus
    }

    pub fn plus(&self) -> &web::HtmlElement {
        &self.plus
    }

    pub fn apply(&mut self, cmd: &ViewCommand) {
        match *cmd {
            ViewCommand::Show { value } => {
                if self.current.is_none() {
                    self.current = self.create_digit();
                    if let Some(el) = &self.current {
                        _ = self.display.append_child(el);
                    }
                }
                if let Some(el) = &self.current {
                    el.set_text_content(Some(&value.to_string()));
                }
            }
            ViewCommand::InsertIncoming { value, direction } => {
                let Some(incoming) = self.create_digit() else {
                    return;
                };
                incoming.set_text_content(Some(&value.to_string()));
                dom::set_digit_pose(&incoming, slide_offset_percent(direction, false), 0.0, BLUR_PX);
                _ = self.display.append_child(&incoming);
                self.outgoing = self.current.replace(incoming);
            }
            ViewCommand::BeginTransition { direction } => {
                if let Some(old) = &self.outgoing {
                    dom::set_digit_pose(old, slide_offset_percent(direction, true), 0.0, BLUR_PX);
                }
                if let Some(new) = &self.current {
                    dom::set_digit_pose(new, 0.0, 1.0, 0.0);
                }
            }
            ViewCommand::RemoveOutgoing => {
                if let Some(old) = self.outgoing.take() {
                    old.remove();
                }
            }
            ViewCommand::Nudge { offset_px } => {
                let transform = if offset_px == 0.0 {
                    "translateX(0)".to_string()
                } else {
                    format!("translateX({}px)", offset_px)
                };
                dom::set_style(&self.display, "transform", &transform);
            }
            ViewCommand::Affordances {
                can_decrement,
                can_increment,
            } => {
                dom::toggle_class(&self.minus, DISABLED_CLASS, !can_decrement);
                dom::toggle_class(&self.plus, DISABLED_CLASS, !can_increment);
            }
        }
    }

    fn create_digit(&self) -> Option<web::HtmlElement> {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("[view] create digit failed: {:?}", e);
                return None;
            }
        };
        el.set_class_name(DIGIT_CLASS);
        el.dyn_into::<web::HtmlElement>().ok()
    }
}
