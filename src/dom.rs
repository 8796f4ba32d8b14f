use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn element_by_selector(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{} is not an HtmlElement: {:?}", selector, e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Position/visibility of a digit: offset in percent, opacity, blur in px.
pub fn set_digit_pose(el: &web::HtmlElement, offset_percent: f32, opacity: f32, blur_px: f32) {
    let transform = if offset_percent == 0.0 {
        "translateX(0)".to_string()
    } else {
        format!("translateX({}%)", offset_percent)
    };
    set_style(el, "transform", &transform);
    set_style(el, "opacity", &format!("{}", opacity));
    set_style(el, "filter", &format!("blur({}px)", blur_px));
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}
