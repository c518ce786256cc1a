use crate::dom::{self, Elements};
use crate::runtime::Runtime;
use orbit_core::{ActivationSource, WidgetEvent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn as_node(target: Option<web::EventTarget>) -> Option<web::Node> {
    target.and_then(|t| t.dyn_into::<web::Node>().ok())
}

pub fn wire_menu_handlers(rt: &Rc<Runtime>, document: &web::Document, els: &Elements) {
    let rt_trigger = rt.clone();
    dom::listen(&els.trigger, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        rt_trigger.post(WidgetEvent::TriggerActivated(ActivationSource::Pointer));
    });

    let rt_doc = rt.clone();
    let els_doc = els.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let target = as_node(ev.target());
        rt_doc.post(WidgetEvent::DocumentClick {
            inside_widget: els_doc.in_trigger_or_menu(target.as_ref()),
        });
    });

    let rt_focus = rt.clone();
    let hub = els.hub.clone();
    dom::listen(&els.hub, "focusout", move |ev: web::FocusEvent| {
        let next = as_node(ev.related_target());
        rt_focus.post(WidgetEvent::FocusOut {
            into_widget: hub.contains(next.as_ref()),
        });
    });

    for link in &els.links {
        let rt_link = rt.clone();
        dom::listen(link, "click", move |_ev: web::MouseEvent| {
            rt_link.post(WidgetEvent::LinkActivated);
        });
    }
}
