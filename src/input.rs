//! Input handling for the camera rig.
//!
//! Keyboard keys drive four virtual axes that ramp toward their target the
//! way engine input axes do; the scroll wheel feeds the zoom channel
//! directly. Key names use the `winit::keyboard::KeyCode` debug format
//! (`"KeyA"`, `"ArrowUp"`, ...) so bindings can live in the JSON config.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Per-frame deltas consumed by the camera rig
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RigInput {
    pub zoom: f32,
    pub rotation: f32,
    pub tilt: f32,
    pub horizontal: f32,
    pub vertical: f32,
}

impl RigInput {
    pub fn is_idle(&self) -> bool {
        self.zoom == 0.0
            && self.rotation == 0.0
            && self.tilt == 0.0
            && self.horizontal == 0.0
            && self.vertical == 0.0
    }
}

/// Key-driven axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
    Rotation,
    Tilt,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rotation, Axis::Tilt];

    fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
            Axis::Rotation => 2,
            Axis::Tilt => 3,
        }
    }
}

/// One key's contribution to an axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub axis: Axis,
    /// Target value while the key is held, usually -1 or +1
    pub direction: f32,
}

impl AxisBinding {
    pub fn new(axis: Axis, direction: f32) -> Self {
        Self { axis, direction }
    }
}

/// Key -> axis mapping plus the axis ramp rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisBindings {
    pub bindings: HashMap<String, AxisBinding>,
    /// Units per second an axis moves toward a held key's direction
    pub sensitivity: f32,
    /// Units per second an axis falls back to zero once released
    pub gravity: f32,
}

impl Default for AxisBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyA".into(), AxisBinding::new(Axis::Horizontal, -1.0)),
            ("KeyD".into(), AxisBinding::new(Axis::Horizontal, 1.0)),
            ("ArrowLeft".into(), AxisBinding::new(Axis::Horizontal, -1.0)),
            ("ArrowRight".into(), AxisBinding::new(Axis::Horizontal, 1.0)),
            ("KeyS".into(), AxisBinding::new(Axis::Vertical, -1.0)),
            ("KeyW".into(), AxisBinding::new(Axis::Vertical, 1.0)),
            ("ArrowDown".into(), AxisBinding::new(Axis::Vertical, -1.0)),
            ("ArrowUp".into(), AxisBinding::new(Axis::Vertical, 1.0)),
            ("KeyQ".into(), AxisBinding::new(Axis::Rotation, -1.0)),
            ("KeyE".into(), AxisBinding::new(Axis::Rotation, 1.0)),
            ("KeyF".into(), AxisBinding::new(Axis::Tilt, -1.0)),
            ("KeyR".into(), AxisBinding::new(Axis::Tilt, 1.0)),
        ]);

        Self {
            bindings,
            sensitivity: AXIS_SENSITIVITY,
            gravity: AXIS_GRAVITY,
        }
    }
}

impl AxisBindings {
    pub fn lookup(&self, key: &str) -> Option<AxisBinding> {
        self.bindings.get(key).copied()
    }

    /// Target value of an axis given the held keys, clamped to [-1, 1]
    pub fn raw_value(&self, axis: Axis, keys_down: &HashSet<String>) -> f32 {
        keys_down
            .iter()
            .filter_map(|key| self.lookup(key))
            .filter(|binding| binding.axis == axis)
            .map(|binding| binding.direction)
            .sum::<f32>()
            .clamp(-1.0, 1.0)
    }
}

/// Smoothed axis value
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualAxis {
    value: f32,
}

impl VirtualAxis {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move toward `raw` at `sensitivity`, or toward zero at `gravity` when
    /// released. Reversing direction snaps through zero first.
    pub fn step(&mut self, raw: f32, sensitivity: f32, gravity: f32, dt: f32) -> f32 {
        if raw == 0.0 {
            self.value = move_towards(self.value, 0.0, gravity * dt);
        } else {
            if self.value != 0.0 && self.value.signum() != raw.signum() {
                self.value = 0.0;
            }
            self.value = move_towards(self.value, raw, sensitivity * dt);
        }

        if self.value.abs() < AXIS_DEAD_ZONE {
            self.value = 0.0;
        }
        self.value
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Debug-format name of a key, as used in bindings
pub fn key_name(key: KeyCode) -> String {
    format!("{key:?}")
}

/// Input state tracking
pub struct InputState {
    /// Keys currently held
    pub keys_down: HashSet<String>,
    /// Keys pressed since they were last consumed
    pub keys_pressed: HashSet<String>,
    /// Scroll accumulated since the last sample, in lines
    scroll_lines: f32,
    axes: [VirtualAxis; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed: HashSet::new(),
            scroll_lines: 0.0,
            axes: [VirtualAxis::default(); 4],
        }
    }

    /// Record a key press. Returns true if the key was not already held
    /// (ignores OS key repeat).
    pub fn press(&mut self, key: KeyCode) -> bool {
        let name = key_name(key);
        let newly_pressed = self.keys_down.insert(name.clone());
        if newly_pressed {
            self.keys_pressed.insert(name);
        }
        newly_pressed
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key_name(key));
    }

    /// Consume a pending press of `key`
    pub fn take_pressed(&mut self, key: KeyCode) -> bool {
        self.keys_pressed.remove(&key_name(key))
    }

    pub fn add_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_lines += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / SCROLL_PIXELS_PER_LINE,
        };
    }

    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.axes[axis.index()].value()
    }

    /// Advance the virtual axes by `dt` and drain the accumulated scroll
    /// into a frame of rig input.
    pub fn sample(&mut self, bindings: &AxisBindings, dt: f32) -> RigInput {
        for axis in Axis::ALL {
            let raw = bindings.raw_value(axis, &self.keys_down);
            self.axes[axis.index()].step(raw, bindings.sensitivity, bindings.gravity, dt);
        }

        let zoom = std::mem::take(&mut self.scroll_lines) * SCROLL_ZOOM_SCALE;

        RigInput {
            zoom,
            rotation: self.axis_value(Axis::Rotation),
            tilt: self.axis_value(Axis::Tilt),
            horizontal: self.axis_value(Axis::Horizontal),
            vertical: self.axis_value(Axis::Vertical),
        }
    }

    /// Drop held keys and axis momentum, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.keys_down.clear();
        self.keys_pressed.clear();
        self.scroll_lines = 0.0;
        self.axes = [VirtualAxis::default(); 4];
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ramps_up_and_saturates() {
        let mut axis = VirtualAxis::default();
        assert!((axis.step(1.0, 3.0, 3.0, 0.1) - 0.3).abs() < 1e-5);
        axis.step(1.0, 3.0, 3.0, 1.0);
        assert_eq!(axis.value(), 1.0);
    }

    #[test]
    fn test_axis_gravity_returns_to_zero() {
        let mut axis = VirtualAxis::default();
        axis.step(1.0, 3.0, 3.0, 1.0);
        axis.step(0.0, 3.0, 3.0, 0.2);
        assert!((axis.value() - 0.4).abs() < 1e-5);
        axis.step(0.0, 3.0, 3.0, 1.0);
        assert_eq!(axis.value(), 0.0);
    }

    #[test]
    fn test_axis_reversal_snaps_through_zero() {
        let mut axis = VirtualAxis::default();
        axis.step(1.0, 3.0, 3.0, 1.0);
        let value = axis.step(-1.0, 3.0, 3.0, 0.1);
        assert!((value + 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let bindings = AxisBindings::default();
        let keys: HashSet<String> = ["KeyA".to_string(), "KeyD".to_string()].into();
        assert_eq!(bindings.raw_value(Axis::Horizontal, &keys), 0.0);
    }

    #[test]
    fn test_duplicate_bindings_clamp() {
        let bindings = AxisBindings::default();
        let keys: HashSet<String> = ["KeyW".to_string(), "ArrowUp".to_string()].into();
        assert_eq!(bindings.raw_value(Axis::Vertical, &keys), 1.0);
    }

    #[test]
    fn test_sample_drains_scroll() {
        let bindings = AxisBindings::default();
        let mut input = InputState::new();
        input.add_scroll(MouseScrollDelta::LineDelta(0.0, 2.0));

        let first = input.sample(&bindings, 0.016);
        assert!((first.zoom - 2.0 * SCROLL_ZOOM_SCALE).abs() < 1e-6);
        assert_eq!(input.sample(&bindings, 0.016).zoom, 0.0);
    }

    #[test]
    fn test_held_key_drives_rotation() {
        let bindings = AxisBindings::default();
        let mut input = InputState::new();
        assert!(input.press(KeyCode::KeyE));
        assert!(!input.press(KeyCode::KeyE));

        let frame = input.sample(&bindings, 0.1);
        assert!(frame.rotation > 0.0);
        assert_eq!(frame.horizontal, 0.0);

        input.release(KeyCode::KeyE);
        input.sample(&bindings, 1.0);
        assert!(input.sample(&bindings, 0.1).is_idle());
    }

    #[test]
    fn test_take_pressed_consumes_once() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyL);
        assert!(input.take_pressed(KeyCode::KeyL));
        assert!(!input.take_pressed(KeyCode::KeyL));
    }
}
