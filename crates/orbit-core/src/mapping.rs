use crate::config::ParallaxConfig;
use crate::constants::{ORIENTATION_AMPLITUDE, ORIENTATION_CLAMP_DEG};
use crate::tilt::TiltAngle;
use glam::Vec2;

/// Pointer position relative to the viewport centre, each axis in [-0.5, 0.5].
///
/// Returns `None` for a degenerate viewport.
#[inline]
pub fn normalize_pointer(pos: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        Some(pos / viewport - Vec2::splat(0.5))
    } else {
        None
    }
}

/// Target tilt for a pointer position. Moving right leans the poster away
/// (negative Y rotation); moving down tilts it back (positive X rotation).
pub fn pointer_target(pos: Vec2, viewport: Vec2, cfg: &ParallaxConfig) -> Option<TiltAngle> {
    let n = normalize_pointer(pos, viewport)?;
    Some(TiltAngle::new(
        cfg.base_tilt_x + n.y * cfg.max_tilt_x,
        cfg.base_tilt_y - n.x * cfg.max_tilt_y,
    ))
}

#[inline]
pub fn rest_target(cfg: &ParallaxConfig) -> TiltAngle {
    TiltAngle::new(cfg.base_tilt_x, cfg.base_tilt_y)
}

#[inline]
fn normalize_orientation(deg: f64) -> f32 {
    let clamp = ORIENTATION_CLAMP_DEG as f64;
    (deg.clamp(-clamp, clamp) / clamp) as f32
}

/// Target tilt from device orientation (beta = front/back, gamma = left/right).
///
/// Both readings are required; a missing one yields `None` so the caller keeps
/// the previous target.
pub fn orientation_target(
    beta: Option<f64>,
    gamma: Option<f64>,
    cfg: &ParallaxConfig,
) -> Option<TiltAngle> {
    let (beta, gamma) = (beta?, gamma?);
    if !beta.is_finite() || !gamma.is_finite() {
        return None;
    }
    Some(TiltAngle::new(
        cfg.base_tilt_x + normalize_orientation(beta) * cfg.max_tilt_x * ORIENTATION_AMPLITUDE,
        cfg.base_tilt_y + normalize_orientation(gamma) * cfg.max_tilt_y * ORIENTATION_AMPLITUDE,
    ))
}
