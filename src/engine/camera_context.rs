//! Holder for the active camera rig.
//!
//! There is at most one active rig. Code that needs to lock the camera or
//! force a bounds check is handed the context explicitly instead of reaching
//! for a global.

use crate::camera::CameraRig;
use crate::grid::MapGrid;
use crate::input::RigInput;
use hecs::World;

pub struct CameraContext {
    active: Option<CameraRig>,
    /// Locked rigs keep their state but ignore input
    locked: bool,
}

impl CameraContext {
    pub fn new() -> Self {
        Self {
            active: None,
            locked: false,
        }
    }

    /// Install `rig` as the active camera, unlocked, and immediately bring
    /// its position back inside the map. Returns the previously active rig.
    pub fn activate(
        &mut self,
        rig: CameraRig,
        world: &mut World,
        grid: &mut impl MapGrid,
    ) -> Option<CameraRig> {
        let previous = self.active.replace(rig);
        self.locked = false;
        self.validate_position(world, grid);
        log::info!("Camera rig activated");
        previous
    }

    /// Stop treating the current rig as active and hand it back.
    pub fn deactivate(&mut self) -> Option<CameraRig> {
        let rig = self.active.take();
        if rig.is_some() {
            log::info!("Camera rig deactivated");
        }
        rig
    }

    pub fn active(&self) -> Option<&CameraRig> {
        self.active.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Enable or disable input processing. Unlocking re-validates the
    /// position, since the map may have changed while the camera was idle.
    pub fn set_locked(&mut self, locked: bool, world: &mut World, grid: &mut impl MapGrid) {
        if self.active.is_none() {
            log::warn!("Ignoring camera lock change: no active camera rig");
            return;
        }
        if self.locked == locked {
            return;
        }

        self.locked = locked;
        log::info!("Camera {}", if locked { "locked" } else { "unlocked" });
        if !locked {
            self.validate_position(world, grid);
        }
    }

    /// Force a bounds pass on the active rig without moving it.
    pub fn validate_position(&mut self, world: &mut World, grid: &mut impl MapGrid) {
        if let Some(rig) = self.active.as_mut() {
            rig.validate_position(world, grid);
        }
    }

    /// Feed one frame of input to the active rig unless locked.
    pub fn tick(&mut self, world: &mut World, grid: &mut impl MapGrid, input: &RigInput, dt: f32) {
        if self.locked {
            return;
        }
        if let Some(rig) = self.active.as_mut() {
            rig.tick(world, grid, input, dt);
        }
    }
}

impl Default for CameraContext {
    fn default() -> Self {
        Self::new()
    }
}
