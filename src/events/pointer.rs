use crate::dom;
use crate::runtime::Runtime;
use orbit_core::WidgetEvent;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Mouse tilt and proximity, plus device orientation where the browser has it.
pub fn wire_pointer_handlers(rt: &Rc<Runtime>, document: &web::Document, window: &web::Window) {
    let rt_move = rt.clone();
    dom::listen_passive(document, "mousemove", move |ev: web::MouseEvent| {
        rt_move.post(WidgetEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });

    let rt_leave = rt.clone();
    dom::listen_passive(document, "mouseleave", move |_ev: web::MouseEvent| {
        rt_leave.post(WidgetEvent::PointerLeave);
    });

    let has_orientation = js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false);
    if has_orientation {
        let rt_orient = rt.clone();
        dom::listen_passive(window, "deviceorientation", move |ev: web::DeviceOrientationEvent| {
            rt_orient.post(WidgetEvent::Orientation {
                beta: ev.beta(),
                gamma: ev.gamma(),
            });
        });
    } else {
        log::info!("[input] no device orientation support");
    }
}
