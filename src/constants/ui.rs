//! Window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
/// Title shown while on the intro scene
pub const WINDOW_INTRO_TITLE: &str = "Hex Map - press any key";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/camera.json";
/// Environment variable that enables the puffin profiler server
pub const PROFILE_ENV_VAR: &str = "HEXCAM_PROFILE";
