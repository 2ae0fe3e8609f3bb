//! Camera rig tuning defaults.

/// Stick distance when fully zoomed out (negative = behind the swivel)
pub const STICK_MIN_ZOOM: f32 = -250.0;
/// Stick distance when fully zoomed in
pub const STICK_MAX_ZOOM: f32 = -45.0;
/// Swivel angle when fully zoomed out (degrees)
pub const SWIVEL_MIN_ZOOM: f32 = 90.0;
/// Swivel angle when fully zoomed in (degrees)
pub const SWIVEL_MAX_ZOOM: f32 = 45.0;
/// Pan speed when fully zoomed out (world units per second)
pub const MOVE_SPEED_MIN_ZOOM: f32 = 400.0;
/// Pan speed when fully zoomed in (world units per second)
pub const MOVE_SPEED_MAX_ZOOM: f32 = 100.0;
/// Yaw speed (degrees per second at full axis deflection)
pub const ROTATION_SPEED: f32 = 180.0;
/// Tilt step per unit of input, also used as the smoothing rate
pub const TILT_SPEED: f32 = 10.0;
/// Lowest pitch the swivel may tilt to (degrees)
pub const TILT_MIN_ANGLE: f32 = 20.0;
/// Highest pitch the swivel may tilt to (degrees, straight down)
pub const TILT_MAX_ANGLE: f32 = 90.0;
/// Initial zoom (1 = closest)
pub const INITIAL_ZOOM: f32 = 1.0;
