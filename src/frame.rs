use crate::runtime::Runtime;
use orbit_core::{FrameHandle, WidgetEvent};
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame glue. One persistent callback posts a `Frame` event;
/// the controller decides whether to ask for the next one.
pub struct FrameClock {
    tick: Closure<dyn FnMut()>,
}

impl FrameClock {
    pub fn new(runtime: Weak<Runtime>) -> Self {
        let tick = Closure::wrap(Box::new(move || {
            if let Some(rt) = runtime.upgrade() {
                rt.post(WidgetEvent::Frame);
            }
        }) as Box<dyn FnMut()>);
        Self { tick }
    }

    pub fn request(&self) -> Option<FrameHandle> {
        let w = web::window()?;
        w.request_animation_frame(self.tick.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    pub fn cancel(&self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

/// Post `event` into the runtime after `delay_ms`. One-shot, never cancelled.
pub fn post_after(runtime: Weak<Runtime>, event: WidgetEvent, delay_ms: u32) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        if let Some(rt) = runtime.upgrade() {
            rt.post(event);
        }
    });
    if w
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        )
        .is_err()
    {
        log::warn!("[timer] setTimeout failed for {:?}", event);
    }
}
