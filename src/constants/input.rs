//! Input axis constants.

/// Rate (units per second) a digital axis ramps toward a held key's target
pub const AXIS_SENSITIVITY: f32 = 3.0;
/// Rate (units per second) a digital axis falls back to zero once released
pub const AXIS_GRAVITY: f32 = 3.0;
/// Axis values below this magnitude are reported as zero
pub const AXIS_DEAD_ZONE: f32 = 0.001;
/// Zoom delta per scroll wheel line
pub const SCROLL_ZOOM_SCALE: f32 = 0.1;
/// Approximate pixels per scroll line for touchpads reporting pixel deltas
pub const SCROLL_PIXELS_PER_LINE: f32 = 40.0;
