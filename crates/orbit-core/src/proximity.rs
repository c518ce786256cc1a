use glam::Vec2;

/// Client-space bounding box of the menu trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorRect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Where the activation zone sits for one check. Built fresh every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl ActivationGeometry {
    pub fn new(anchor: &AnchorRect, base_radius: f32, expansion: f32) -> Self {
        Self {
            center: anchor.center(),
            radius: base_radius * expansion,
        }
    }

    #[inline]
    pub fn contains(&self, pointer: Vec2) -> bool {
        pointer.distance(self.center) <= self.radius
    }
}

/// Whether proximity alone justifies an open menu. Stateless; the boundary is
/// inclusive and has no hysteresis band.
#[inline]
pub fn evaluate(pointer: Vec2, anchor: &AnchorRect, base_radius: f32, expansion: f32) -> bool {
    ActivationGeometry::new(anchor, base_radius, expansion).contains(pointer)
}
