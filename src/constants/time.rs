//! Frame timing constants.

/// Maximum frame delta fed to the camera (seconds); longer frames are capped
pub const MAX_FRAME_DT: f32 = 0.05; // 50ms cap (~20 FPS minimum)
