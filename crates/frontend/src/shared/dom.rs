//! Lookups and small writes against the host page.
//!
//! Every helper tolerates missing elements: callers get `None` and skip the
//! dependent step.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element(id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document()?.get_element_by_id(id)
}

pub fn html_element(id: &str) -> Option<HtmlElement> {
    element(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Sets the text of element `id` if it is on the page.
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(el) = element(id) {
        set_text(&el, text);
    }
}

/// Sets `display` of element `id` if it is on the page.
pub fn set_display_by_id(id: &str, value: &str) {
    if let Some(el) = html_element(id) {
        set_display(&el, value);
    }
}

/// Attaches a click handler for the lifetime of the page.
pub fn on_click(target: &EventTarget, handler: impl FnMut() + 'static) {
    on_event(target, "click", handler);
}

/// Attaches an event handler for the lifetime of the page.
pub fn on_event(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handler();
    }) as Box<dyn FnMut(_)>);

    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget(); // Keep the closure alive
}

/// `true` while the document is still parsing
pub fn is_loading() -> bool {
    document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false)
}
