use crate::dom::{self, Elements};
use crate::runtime::Runtime;
use orbit_core::WidgetEvent;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn targets_trigger(ev: &web::KeyboardEvent, trigger: &web::HtmlElement) -> bool {
    let trigger: &web::Node = trigger;
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .is_some_and(|node| node.is_same_node(Some(trigger)))
}

/// Escape anywhere closes; Enter/Space on the trigger toggles.
pub fn wire_keydown(rt: &Rc<Runtime>, document: &web::Document, els: &Elements) {
    let rt = rt.clone();
    let trigger = els.trigger.clone();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        let on_trigger = targets_trigger(&ev, &trigger);
        let Some(event) = WidgetEvent::from_key(&ev.key(), on_trigger) else {
            return;
        };
        if matches!(event, WidgetEvent::TriggerActivated(_)) {
            // keep the browser from synthesizing a second toggle via click
            ev.prevent_default();
        }
        rt.post(event);
    });
}
