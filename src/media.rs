use crate::dom::{COARSE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use orbit_core::CapabilitySignals;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn media_query(window: &web::Window, query: &str) -> Option<web::MediaQueryList> {
    window.match_media(query).ok().flatten()
}

#[inline]
fn matches(window: &web::Window, query: &str) -> bool {
    media_query(window, query).is_some_and(|m| m.matches())
}

/// Read touch and motion signals from the live environment. Anything the
/// browser does not expose reads as absent.
pub fn capability_signals() -> CapabilitySignals {
    let Some(window) = web::window() else {
        return CapabilitySignals::default();
    };
    CapabilitySignals {
        touch_start: js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false),
        max_touch_points: window.navigator().max_touch_points().max(0) as u32,
        coarse_pointer: matches(&window, COARSE_POINTER_QUERY),
        reduced_motion: matches(&window, REDUCED_MOTION_QUERY),
    }
}
