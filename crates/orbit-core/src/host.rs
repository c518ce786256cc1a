//! Contract between the controller and the page it runs in.
//!
//! The controller reads layout through these methods inside the same event it
//! handles, so a measurement is never older than the event that uses it.

use crate::capability::CapabilitySignals;
use crate::menu::DeferredAction;
use crate::proximity::AnchorRect;
use crate::render_loop::FramePose;
use glam::Vec2;

/// Opaque id of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait WidgetHost {
    // -- layout and environment --
    fn viewport(&self) -> Option<Vec2>;
    fn anchor_rect(&self) -> Option<AnchorRect>;
    /// Current visual orbit radius in px, if the page exposes one.
    fn orbit_radius(&self) -> Option<f32>;
    fn capability_signals(&self) -> CapabilitySignals;
    fn has_links(&self) -> bool;
    fn page_hidden(&self) -> bool;

    // -- output sink --
    fn apply_pose(&mut self, pose: &FramePose);
    /// Clear all transforms back to the untransformed layout.
    fn reset_pose(&mut self);
    fn present_menu(&mut self, open: bool);
    fn focus_trigger(&mut self);
    fn focus_first_link(&mut self);

    // -- scheduling --
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Fire `action` back into the controller after `delay_ms`.
    fn defer(&mut self, action: DeferredAction, delay_ms: u32);
}
