use crate::dom::{self, Elements, OPEN_CLASS, ORBIT_RADIUS_VAR};
use crate::frame::{self, FrameClock};
use crate::media;
use crate::runtime::Runtime;
use crate::style;
use glam::Vec2;
use orbit_core::{
    AnchorRect, CapabilitySignals, DeferredAction, FrameHandle, FramePose, WidgetEvent,
    WidgetHost,
};
use std::rc::Weak;
use web_sys as web;

/// DOM-backed implementation of the controller's host contract.
pub struct WebHost {
    els: Elements,
    clock: FrameClock,
    runtime: Weak<Runtime>,
}

impl WebHost {
    pub fn new(els: Elements, runtime: Weak<Runtime>) -> Self {
        Self {
            clock: FrameClock::new(runtime.clone()),
            els,
            runtime,
        }
    }
}

#[inline]
fn set_transform(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transform", css);
}

#[inline]
fn clear_transform(el: &web::HtmlElement) {
    _ = el.style().remove_property("transform");
}

impl WidgetHost for WebHost {
    fn viewport(&self) -> Option<Vec2> {
        let w = web::window()?;
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some(Vec2::new(width as f32, height as f32))
    }

    fn anchor_rect(&self) -> Option<AnchorRect> {
        let r = self.els.trigger.get_bounding_client_rect();
        Some(AnchorRect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        })
    }

    fn orbit_radius(&self) -> Option<f32> {
        let w = web::window()?;
        let root = dom::window_document()?.document_element()?;
        let computed = w.get_computed_style(&root).ok()??;
        let value = computed.get_property_value(ORBIT_RADIUS_VAR).ok()?;
        style::parse_css_length(&value)
    }

    fn capability_signals(&self) -> CapabilitySignals {
        media::capability_signals()
    }

    fn has_links(&self) -> bool {
        !self.els.links.is_empty()
    }

    fn page_hidden(&self) -> bool {
        dom::window_document().is_some_and(|d| d.hidden())
    }

    fn apply_pose(&mut self, pose: &FramePose) {
        let Some(poster) = &self.els.poster else {
            return;
        };
        set_transform(poster, &style::transform_css(&pose.poster));
        if let Some(mark) = &self.els.mark {
            set_transform(mark, &style::transform_css(&pose.mark));
        }
        set_transform(&self.els.menu, &style::transform_css(&pose.menu));
    }

    fn reset_pose(&mut self) {
        if let Some(poster) = &self.els.poster {
            clear_transform(poster);
        }
        if let Some(mark) = &self.els.mark {
            clear_transform(mark);
        }
        clear_transform(&self.els.menu);
    }

    fn present_menu(&mut self, open: bool) {
        let cl = self.els.hub.class_list();
        if open {
            _ = cl.add_1(OPEN_CLASS);
        } else {
            _ = cl.remove_1(OPEN_CLASS);
        }
        _ = self
            .els
            .trigger
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    fn focus_trigger(&mut self) {
        _ = self.els.trigger.focus();
    }

    fn focus_first_link(&mut self) {
        if let Some(link) = self.els.links.first() {
            _ = link.focus();
        }
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.clock.request()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.clock.cancel(handle);
    }

    fn defer(&mut self, action: DeferredAction, delay_ms: u32) {
        frame::post_after(self.runtime.clone(), WidgetEvent::Deferred(action), delay_ms);
    }
}
