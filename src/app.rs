//! Application window management.
//!
//! This module handles window creation and the status line shown in the
//! title bar. It keeps platform concerns out of the engine.

use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::constants::*;
use crate::engine::CameraStatus;

/// Create the application window.
pub fn create_window(event_loop: &ActiveEventLoop) -> Result<Window, OsError> {
    let window_attrs = WindowAttributes::default()
        .with_title(WINDOW_INTRO_TITLE)
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);

    event_loop.create_window(window_attrs)
}

/// Title bar text for the current camera state
pub fn window_title(status: Option<&CameraStatus>) -> String {
    let Some(status) = status else {
        return WINDOW_INTRO_TITLE.to_string();
    };

    format!(
        "Hex Map - pos ({:.1}, {:.1}) eye ({:.1}, {:.1}, {:.1}) zoom {:.2} yaw {:.0}\u{b0} tilt {:.0}\u{b0}{}",
        status.position.x,
        status.position.z,
        status.eye.x,
        status.eye.y,
        status.eye.z,
        status.zoom,
        status.rotation,
        status.tilt,
        if status.locked { " [locked]" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_intro_title() {
        assert_eq!(window_title(None), WINDOW_INTRO_TITLE);
    }

    #[test]
    fn test_locked_title_is_marked() {
        let status = CameraStatus {
            position: Vec3::new(1.0, 0.0, 2.0),
            eye: Vec3::ZERO,
            zoom: 0.5,
            rotation: 90.0,
            tilt: 45.0,
            locked: true,
        };
        let title = window_title(Some(&status));
        assert!(title.contains("pos (1.0, 2.0)"));
        assert!(title.ends_with("[locked]"));
    }
}
