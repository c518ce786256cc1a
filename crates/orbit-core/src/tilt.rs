//! Tilt state and its per-frame exponential smoothing.

use glam::Vec2;

/// Rotation in degrees around the X and Y axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltAngle {
    pub x: f32,
    pub y: f32,
}

impl TiltAngle {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same magnitude, opposite direction on both axes.
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Vec2> for TiltAngle {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<TiltAngle> for Vec2 {
    fn from(t: TiltAngle) -> Self {
        Vec2::new(t.x, t.y)
    }
}

/// One first-order low-pass step: close `factor` of the remaining gap on each axis.
#[inline]
pub fn step(current: TiltAngle, target: TiltAngle, factor: f32) -> TiltAngle {
    let c = Vec2::from(current);
    (c + (Vec2::from(target) - c) * factor).into()
}

/// Rendered (`current`) and desired (`target`) tilt.
///
/// `current` only moves through [`TiltIntegrator::advance`]; `target` only
/// through [`TiltIntegrator::set_target`], which the input mappers feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltIntegrator {
    current: TiltAngle,
    target: TiltAngle,
}

impl TiltIntegrator {
    /// Start at rest: both angles at the base pose.
    pub fn at_rest(base: TiltAngle) -> Self {
        Self {
            current: base,
            target: base,
        }
    }

    #[inline]
    pub fn current(&self) -> TiltAngle {
        self.current
    }

    #[inline]
    pub fn target(&self) -> TiltAngle {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: TiltAngle) {
        self.target = target;
    }

    /// Advance one frame and return the new rendered tilt.
    pub fn advance(&mut self, factor: f32) -> TiltAngle {
        self.current = step(self.current, self.target, factor);
        self.current
    }
}
