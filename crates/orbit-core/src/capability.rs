/// Raw environment readings taken by the host. Kept separate from
/// [`Capabilities`] so detection stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySignals {
    /// `ontouchstart` exists on the window.
    pub touch_start: bool,
    pub max_touch_points: u32,
    /// `(pointer: coarse)` matches.
    pub coarse_pointer: bool,
    /// `(prefers-reduced-motion: reduce)` matches.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub is_touch: bool,
    pub reduced_motion: bool,
}

impl Capabilities {
    pub fn detect(signals: &CapabilitySignals) -> Self {
        Self {
            is_touch: signals.touch_start
                || signals.max_touch_points > 0
                || signals.coarse_pointer,
            reduced_motion: signals.reduced_motion,
        }
    }

    /// Parallax runs only on pointer-primary devices without a reduced-motion request.
    #[inline]
    pub fn allows_parallax(&self) -> bool {
        !self.is_touch && !self.reduced_motion
    }
}
