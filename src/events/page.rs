use crate::dom::{self, REDUCED_MOTION_QUERY};
use crate::media;
use crate::runtime::Runtime;
use orbit_core::WidgetEvent;
use std::rc::Rc;
use web_sys as web;

/// Resize, reduced-motion preference and tab visibility.
pub fn wire_page_handlers(rt: &Rc<Runtime>, document: &web::Document, window: &web::Window) {
    let rt_resize = rt.clone();
    dom::listen_passive(window, "resize", move |_ev: web::Event| {
        rt_resize.post(WidgetEvent::Resize);
    });

    if let Some(mq) = media::media_query(window, REDUCED_MOTION_QUERY) {
        let rt_motion = rt.clone();
        dom::listen(&mq, "change", move |_ev: web::Event| {
            rt_motion.post(WidgetEvent::ReducedMotionChanged);
        });
    }

    let rt_vis = rt.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_ev: web::Event| {
        rt_vis.post(WidgetEvent::VisibilityChanged {
            hidden: doc.hidden(),
        });
    });
}
