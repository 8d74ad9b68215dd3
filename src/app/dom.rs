use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::nav::Indicator;
use crate::observer::Bounds;

fn element(id: &str) -> Option<web_sys::Element> {
    document().get_element_by_id(id)
}

pub fn bounds(el: &web_sys::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn bounds_of(id: &str) -> Option<Bounds> {
    element(id).map(|el| bounds(&el))
}

/// Top edge of `id` relative to the viewport.
pub fn viewport_top(id: &str) -> Option<f64> {
    bounds_of(id).map(|b| b.top)
}

/// Top edge of `id` relative to the start of the document.
pub fn document_top(id: &str) -> Option<f64> {
    viewport_top(id).map(|top| top + scroll_y())
}

pub fn document_end() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default()
}

/// Horizontal box of `id` within its offset parent.
pub fn offset_box(id: &str) -> Option<Indicator> {
    let el = element(id)?.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(Indicator::new(el.offset_left() as f64, el.offset_width() as f64))
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn scroll_window_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}
