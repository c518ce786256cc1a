// Tuning constants shared by the core and the web frontend.

// Parallax pose (degrees)
pub const MAX_TILT_X: f32 = 15.0; // peak deviation around the X axis
pub const MAX_TILT_Y: f32 = 8.0; // peak deviation around the Y axis
pub const BASE_TILT_X: f32 = 12.0; // resting pose, poster leans back slightly
pub const BASE_TILT_Y: f32 = 0.0;

// Fraction of the remaining distance closed per frame (lower = smoother)
pub const SMOOTHING: f32 = 0.08;

// Device orientation mapping
pub const ORIENTATION_CLAMP_DEG: f32 = 45.0; // raw beta/gamma are clamped to +-this
pub const ORIENTATION_AMPLITUDE: f32 = 0.5; // relative to the pointer mapper

// Proximity activation
pub const DEFAULT_ORBIT_RADIUS_PX: f32 = 220.0; // used when --orbit-radius is unreadable
pub const ACTIVATION_EXPANSION: f32 = 1.2; // activation zone vs visual orbit

// Deferred menu actions (milliseconds)
pub const LINK_CLOSE_DELAY_MS: u32 = 100;
pub const FIRST_LINK_FOCUS_DELAY_MS: u32 = 50;

// Depth translation per output element (px)
pub const POSTER_DEPTH_PX: f32 = -100.0;
pub const MARK_DEPTH_PX: f32 = 100.0;
pub const MENU_DEPTH_PX: f32 = 200.0;
