use crate::constants::{MARK_DEPTH_PX, MENU_DEPTH_PX, POSTER_DEPTH_PX};
use crate::host::{FrameHandle, WidgetHost};
use crate::tilt::TiltAngle;

/// Two-axis rotation plus a fixed push along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTransform {
    pub rotate: TiltAngle,
    pub depth_px: f32,
}

/// Transforms for the three parallax layers of one frame.
///
/// The poster takes the tilt directly and sits behind; the trigger mark and the
/// menu surface counter-rotate in front of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePose {
    pub poster: ElementTransform,
    pub mark: ElementTransform,
    pub menu: ElementTransform,
}

impl FramePose {
    pub fn from_tilt(tilt: TiltAngle) -> Self {
        let counter = tilt.inverted();
        Self {
            poster: ElementTransform {
                rotate: tilt,
                depth_px: POSTER_DEPTH_PX,
            },
            mark: ElementTransform {
                rotate: counter,
                depth_px: MARK_DEPTH_PX,
            },
            menu: ElementTransform {
                rotate: counter,
                depth_px: MENU_DEPTH_PX,
            },
        }
    }
}

/// Tracks the single outstanding frame request.
#[derive(Debug, Default)]
pub struct RenderLoop {
    pending: Option<FrameHandle>,
}

impl RenderLoop {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Request the next frame unless one is already pending.
    pub fn start(&mut self, host: &mut impl WidgetHost) {
        if self.pending.is_some() {
            return;
        }
        self.pending = host.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host has no frame clock");
        }
    }

    /// Cancel the pending frame. Safe to call when already stopped.
    pub fn stop(&mut self, host: &mut impl WidgetHost) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
    }

    /// Consume the pending request when its frame arrives. Returns false for a
    /// frame that was cancelled or never requested.
    pub fn begin_frame(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
