//! Camera rig and map configuration with JSON file support.
//!
//! Every struct uses `#[serde(default)]`, so a file that only overrides a
//! few rig speeds still loads.

use crate::constants::*;
use crate::error::RigError;
use crate::grid::{GridConfig, HexMetrics};
use crate::input::AxisBindings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning for the camera rig. Immutable once the rig is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    /// Stick distance at zoom 0
    pub stick_min_zoom: f32,
    /// Stick distance at zoom 1
    pub stick_max_zoom: f32,
    /// Swivel angle range. Carried for tooling; zoom drives the pitch
    /// through the tilt clamp range instead.
    pub swivel_min_zoom: f32,
    pub swivel_max_zoom: f32,
    /// Pan speed at zoom 0
    pub move_speed_min_zoom: f32,
    /// Pan speed at zoom 1
    pub move_speed_max_zoom: f32,
    pub rotation_speed: f32,
    pub tilt_speed: f32,
    pub tilt_min_angle: f32,
    pub tilt_max_angle: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            stick_min_zoom: STICK_MIN_ZOOM,
            stick_max_zoom: STICK_MAX_ZOOM,
            swivel_min_zoom: SWIVEL_MIN_ZOOM,
            swivel_max_zoom: SWIVEL_MAX_ZOOM,
            move_speed_min_zoom: MOVE_SPEED_MIN_ZOOM,
            move_speed_max_zoom: MOVE_SPEED_MAX_ZOOM,
            rotation_speed: ROTATION_SPEED,
            tilt_speed: TILT_SPEED,
            tilt_min_angle: TILT_MIN_ANGLE,
            tilt_max_angle: TILT_MAX_ANGLE,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub rig: RigConfig,
    pub metrics: HexMetrics,
    pub grid: GridConfig,
    pub bindings: AxisBindings,
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let json_str = std::fs::read_to_string(path)?;
        serde_json::from_str(&json_str)
            .map_err(|e| RigError::ConfigParse(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded camera config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default camera config ({e})");
                Self::default()
            }
        }
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let json_str = serde_json::to_string_pretty(self)
            .map_err(|e| RigError::ConfigParse(e.to_string()))?;
        std::fs::write(path, json_str)?;
        Ok(())
    }
}
