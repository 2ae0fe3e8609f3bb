//! Map engine - owns the camera, map and input state and provides a clean
//! API to the application shell.
//!
//! The engine handles:
//! - Scene progression (intro -> map)
//! - Input collection and axis sampling
//! - Building and driving the camera rig
//!
//! The application shell (main.rs) only handles:
//! - Window creation and event loop
//! - Forwarding events to the engine
//! - Showing the camera status the engine reports

mod camera_context;
mod scene;

pub use camera_context::CameraContext;
pub use scene::{Scene, SceneDirector};

use crate::camera::{self, CameraRig};
use crate::config::AppConfig;
use crate::error::RigError;
use crate::grid::{HexGrid, MapGrid};
use crate::hierarchy;
use crate::input::InputState;

use glam::Vec3;
use hecs::World;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions the engine wants the window to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Exit,
}

/// Snapshot of the active camera for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraStatus {
    pub position: Vec3,
    pub eye: Vec3,
    pub zoom: f32,
    pub rotation: f32,
    pub tilt: f32,
    pub locked: bool,
}

/// The map engine - owns all camera state and frame logic.
pub struct MapEngine {
    pub scenes: SceneDirector,
    /// Rig transform hierarchy
    pub world: World,
    pub grid: HexGrid,
    pub camera: CameraContext,
    pub input: InputState,
    config: AppConfig,
}

impl MapEngine {
    /// Create an engine on the intro scene. The camera rig is built when the
    /// map scene is entered.
    pub fn new(config: AppConfig) -> Result<Self, RigError> {
        let grid = HexGrid::new(config.grid, config.metrics)?;

        Ok(Self {
            scenes: SceneDirector::new(),
            world: World::new(),
            grid,
            camera: CameraContext::new(),
            input: InputState::new(),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Spawn the rig over the middle of the map and make it the active camera.
    pub fn enter_map(&mut self) -> Result<(), RigError> {
        let metrics = self.grid.metrics();
        let start = Vec3::new(
            self.grid.width() * 0.5,
            0.0,
            camera::max_z(&self.grid, &metrics) * 0.5,
        );

        let root = hierarchy::spawn_rig(&mut self.world, start);
        let rig = CameraRig::new(&mut self.world, root, self.config.rig)?;
        if let Some(previous) = self.camera.activate(rig, &mut self.world, &mut self.grid) {
            let _ = self.world.despawn(previous.nodes().stick);
            let _ = self.world.despawn(previous.nodes().swivel);
            let _ = self.world.despawn(previous.nodes().root);
        }
        Ok(())
    }

    /// Handle a window event.
    /// Returns a WindowAction if the engine wants the window to do something.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<WindowAction> {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(key) = key_event.physical_key {
                    match key_event.state {
                        ElementState::Pressed => {
                            if key == KeyCode::Escape {
                                return Some(WindowAction::Exit);
                            }
                            if self.input.press(key) && self.scenes.on_key_down().is_some() {
                                // The key that left the intro is not a map command
                                self.input.keys_pressed.clear();
                                if let Err(e) = self.enter_map() {
                                    log::error!("Failed to enter map scene: {e}");
                                    return Some(WindowAction::Exit);
                                }
                            }
                        }
                        ElementState::Released => {
                            self.input.release(key);
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if self.scenes.scene() == Scene::Map {
                    self.input.add_scroll(*delta);
                }
            }
            WindowEvent::Focused(false) => {
                self.input.clear();
            }
            _ => {}
        }
        None
    }

    /// Process a frame: apply control keys, sample the input axes and move
    /// the camera. Nothing happens on the intro scene.
    pub fn tick(&mut self, dt: f32) {
        puffin::profile_function!();

        if self.scenes.scene() != Scene::Map {
            return;
        }

        if self.input.take_pressed(KeyCode::KeyL) {
            let locked = !self.camera.is_locked();
            self.camera.set_locked(locked, &mut self.world, &mut self.grid);
        }
        if self.input.take_pressed(KeyCode::KeyV) {
            self.camera.validate_position(&mut self.world, &mut self.grid);
        }
        self.input.keys_pressed.clear();

        let frame = self.input.sample(&self.config.bindings, dt);
        self.camera.tick(&mut self.world, &mut self.grid, &frame, dt);
    }

    /// Current camera state, if the map scene has an active rig
    pub fn camera_status(&self) -> Option<CameraStatus> {
        let rig = self.camera.active()?;
        Some(CameraStatus {
            position: rig.position(&self.world)?,
            eye: rig.eye_position(&self.world)?,
            zoom: rig.zoom(),
            rotation: rig.rotation_angle(),
            tilt: rig.tilt_angle(&self.world)?,
            locked: self.camera.is_locked(),
        })
    }
}
