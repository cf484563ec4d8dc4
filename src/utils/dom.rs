//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Resolve an event's target as an [`Element`].
///
/// Returns `None` when the event has no target or the target is not an
/// element (e.g. the document itself).
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
