//! Widget configuration.
//!
//! Everything here is fixed at construction; the only field that changes at
//! runtime is [`ParallaxConfig::enabled`], which follows the detected
//! capabilities.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    SmoothingOutOfRange(f32),
    #[error("max tilt on {axis} axis must be non-negative, got {value}")]
    NegativeMaxTilt { axis: char, value: f32 },
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Tilt limits and smoothing for the poster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    pub max_tilt_x: f32,
    pub max_tilt_y: f32,
    pub base_tilt_x: f32,
    pub base_tilt_y: f32,
    pub smoothing: f32,
    pub enabled: bool,
}

impl ParallaxConfig {
    pub fn new(
        max_tilt_x: f32,
        max_tilt_y: f32,
        base_tilt_x: f32,
        base_tilt_y: f32,
        smoothing: f32,
    ) -> Result<Self, ConfigError> {
        for (name, v) in [
            ("max_tilt_x", max_tilt_x),
            ("max_tilt_y", max_tilt_y),
            ("base_tilt_x", base_tilt_x),
            ("base_tilt_y", base_tilt_y),
            ("smoothing", smoothing),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if max_tilt_x < 0.0 {
            return Err(ConfigError::NegativeMaxTilt {
                axis: 'x',
                value: max_tilt_x,
            });
        }
        if max_tilt_y < 0.0 {
            return Err(ConfigError::NegativeMaxTilt {
                axis: 'y',
                value: max_tilt_y,
            });
        }
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(ConfigError::SmoothingOutOfRange(smoothing));
        }
        Ok(Self {
            max_tilt_x,
            max_tilt_y,
            base_tilt_x,
            base_tilt_y,
            smoothing,
            enabled: true,
        })
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            max_tilt_x: MAX_TILT_X,
            max_tilt_y: MAX_TILT_Y,
            base_tilt_x: BASE_TILT_X,
            base_tilt_y: BASE_TILT_Y,
            smoothing: SMOOTHING,
            enabled: true,
        }
    }
}

/// Proximity activation zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationConfig {
    /// Orbit radius used when the live layout value is missing or unusable.
    pub fallback_radius: f32,
    pub expansion: f32,
}

impl ActivationConfig {
    /// Pick the live radius when it is a usable length, otherwise the fallback.
    #[inline]
    pub fn base_radius(&self, measured: Option<f32>) -> f32 {
        match measured {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => self.fallback_radius,
        }
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            fallback_radius: DEFAULT_ORBIT_RADIUS_PX,
            expansion: ACTIVATION_EXPANSION,
        }
    }
}

/// Delays for the two one-shot deferred menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTiming {
    pub link_close_ms: u32,
    pub first_link_focus_ms: u32,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            link_close_ms: LINK_CLOSE_DELAY_MS,
            first_link_focus_ms: FIRST_LINK_FOCUS_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetConfig {
    pub parallax: ParallaxConfig,
    pub activation: ActivationConfig,
    pub timing: MenuTiming,
}
