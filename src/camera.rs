//! Hex map camera rig.
//!
//! Three nodes make up the rig: the root carries yaw and map position, the
//! swivel carries pitch, and the stick carries the zoom distance. Each frame
//! the four input channels are applied in a fixed order, skipping any
//! channel with a zero delta.

use crate::components::Transform;
use crate::config::RigConfig;
use crate::error::RigError;
use crate::grid::{HexMetrics, MapGrid};
use crate::hierarchy::{self, RigNodes};
use crate::input::RigInput;
use glam::Vec3;
use hecs::{Entity, World};

pub struct CameraRig {
    nodes: RigNodes,
    config: RigConfig,
    /// 0 = farthest, 1 = closest
    zoom: f32,
    /// Yaw in degrees, kept in [0, 360)
    rotation_angle: f32,
}

impl CameraRig {
    /// Build a rig on an existing root -> swivel -> stick hierarchy and
    /// pose the stick and swivel for the initial zoom.
    pub fn new(world: &mut World, root: Entity, config: RigConfig) -> Result<Self, RigError> {
        let nodes = RigNodes::resolve(world, root)?;
        let mut rig = Self {
            nodes,
            config,
            zoom: crate::constants::INITIAL_ZOOM,
            rotation_angle: 0.0,
        };
        rig.adjust_zoom(world, 0.0);
        Ok(rig)
    }

    pub fn nodes(&self) -> RigNodes {
        self.nodes
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Current swivel pitch in (-180, 180]
    pub fn tilt_angle(&self, world: &World) -> Option<f32> {
        hierarchy::local_transform(world, self.nodes.swivel)
            .map(|t| signed_angle(hierarchy::pitch_degrees(t.rotation)))
    }

    /// Root position on the map
    pub fn position(&self, world: &World) -> Option<Vec3> {
        hierarchy::local_transform(world, self.nodes.root).map(|t| t.translation)
    }

    /// World-space position of the camera at the end of the stick
    pub fn eye_position(&self, world: &World) -> Option<Vec3> {
        hierarchy::world_position(world, self.nodes.stick)
    }

    /// Apply one frame of input. Zoom and tilt both write the swivel pitch;
    /// tilt runs first so a zoom in the same frame overwrites it.
    pub fn tick(&mut self, world: &mut World, grid: &mut impl MapGrid, input: &RigInput, dt: f32) {
        puffin::profile_function!();

        if input.is_idle() {
            return;
        }

        if input.tilt != 0.0 {
            self.adjust_tilt(world, input.tilt, dt);
        }

        if input.zoom != 0.0 {
            self.adjust_zoom(world, input.zoom);
        }

        if input.rotation != 0.0 {
            self.adjust_rotation(world, input.rotation, dt);
        }

        if input.horizontal != 0.0 || input.vertical != 0.0 {
            self.adjust_position(world, grid, input.horizontal, input.vertical, dt);
        }
    }

    /// Re-apply the map bounds without moving.
    pub fn validate_position(&mut self, world: &mut World, grid: &mut impl MapGrid) {
        self.adjust_position(world, grid, 0.0, 0.0, 0.0);
    }

    /// Change zoom and re-pose the stick and swivel from it. The pitch is
    /// interpolated across the tilt range, closest zoom looking shallowest,
    /// and overwrites whatever tilt the swivel had.
    pub fn adjust_zoom(&mut self, world: &mut World, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(0.0, 1.0);

        let distance = lerp(self.config.stick_min_zoom, self.config.stick_max_zoom, self.zoom);
        hierarchy::set_local_transform(
            world,
            self.nodes.stick,
            Transform::from_translation(Vec3::new(0.0, 0.0, distance)),
        );

        let angle = lerp(self.config.tilt_max_angle, self.config.tilt_min_angle, self.zoom);
        set_rotation(world, self.nodes.swivel, hierarchy::pitch_rotation(angle));
    }

    pub fn adjust_rotation(&mut self, world: &mut World, delta: f32, dt: f32) {
        self.rotation_angle += delta * self.config.rotation_speed * dt;
        if self.rotation_angle < 0.0 {
            self.rotation_angle += 360.0;
        } else if self.rotation_angle >= 360.0 {
            self.rotation_angle -= 360.0;
        }
        // A tiny negative step from 0 rounds up to exactly 360
        if self.rotation_angle >= 360.0 {
            self.rotation_angle = 0.0;
        }

        set_rotation(world, self.nodes.root, hierarchy::yaw_rotation(self.rotation_angle));
    }

    /// Ease the pitch toward `current + delta * tilt_speed`, clamped to the
    /// tilt range. The easing factor is `dt * tilt_speed`, saturating at 1.
    pub fn adjust_tilt(&mut self, world: &mut World, delta: f32, dt: f32) {
        let Some(current) = self.tilt_angle(world) else {
            return;
        };

        let target = clamp(
            current + delta * self.config.tilt_speed,
            self.config.tilt_min_angle,
            self.config.tilt_max_angle,
        );
        let smoothed = lerp(current, target, dt * self.config.tilt_speed);

        set_rotation(world, self.nodes.swivel, hierarchy::pitch_rotation(smoothed));
    }

    /// Pan along the rig's yaw. Speed scales with zoom and with the larger
    /// of the two axis magnitudes, not the vector length.
    pub fn adjust_position(
        &mut self,
        world: &mut World,
        grid: &mut impl MapGrid,
        x_delta: f32,
        z_delta: f32,
        dt: f32,
    ) {
        let Some(root) = hierarchy::local_transform(world, self.nodes.root) else {
            return;
        };

        let direction = root.rotation * Vec3::new(x_delta, 0.0, z_delta).normalize_or_zero();
        let damping = x_delta.abs().max(z_delta.abs());
        let distance = lerp(
            self.config.move_speed_min_zoom,
            self.config.move_speed_max_zoom,
            self.zoom,
        ) * damping
            * dt;

        let position = root.translation + direction * distance;
        let position = if grid.is_wrapping() {
            wrap_position(position, grid)
        } else {
            clamp_position(position, &*grid)
        };

        hierarchy::set_local_transform(
            world,
            self.nodes.root,
            Transform {
                translation: position,
                rotation: root.rotation,
            },
        );
    }
}

/// Largest x the camera may reach on a non-wrapping map
pub fn max_x(grid: &impl MapGrid, metrics: &HexMetrics) -> f32 {
    (grid.cell_count_x() as f32 - 0.5) * metrics.inner_diameter()
}

/// Largest z the camera may reach on any map
pub fn max_z(grid: &impl MapGrid, metrics: &HexMetrics) -> f32 {
    (grid.cell_count_z() - 1) as f32 * (1.5 * metrics.outer_radius)
}

pub fn clamp_position(mut position: Vec3, grid: &impl MapGrid) -> Vec3 {
    let metrics = grid.metrics();
    position.x = clamp(position.x, 0.0, max_x(grid, &metrics));
    position.z = clamp(position.z, 0.0, max_z(grid, &metrics));
    position
}

/// Wrap x into [0, width), clamp z, then recenter the map on the new x.
pub fn wrap_position(mut position: Vec3, grid: &mut impl MapGrid) -> Vec3 {
    let metrics = grid.metrics();
    let width = grid.cell_count_x() as f32 * metrics.inner_diameter();
    if width > 0.0 {
        while position.x < 0.0 {
            position.x += width;
        }
        while position.x >= width {
            position.x -= width;
        }
    }

    position.z = clamp(position.z, 0.0, max_z(&*grid, &metrics));

    grid.center_map(position.x);
    position
}

fn set_rotation(world: &mut World, entity: Entity, rotation: glam::Quat) {
    if let Ok(mut t) = world.get::<&mut Transform>(entity) {
        t.rotation = rotation;
    }
}

/// Linear interpolation with `t` saturated to [0, 1]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Clamp that tolerates `min > max` (yields `max`) instead of panicking
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Map an angle in [0, 360) to (-180, 180]
fn signed_angle(degrees: f32) -> f32 {
    if degrees > 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROTATION_SPEED;
    use crate::hierarchy::spawn_rig;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Grid double that records every recenter call
    struct TestGrid {
        cell_count_x: i32,
        cell_count_z: i32,
        wrapping: bool,
        metrics: HexMetrics,
        centered_at: Vec<f32>,
    }

    impl TestGrid {
        fn new(cell_count_x: i32, cell_count_z: i32, wrapping: bool) -> Self {
            Self {
                cell_count_x,
                cell_count_z,
                wrapping,
                metrics: HexMetrics {
                    outer_radius: 1.0,
                    inner_radius: 0.5,
                    chunk_size_x: 5,
                },
                centered_at: Vec::new(),
            }
        }
    }

    impl MapGrid for TestGrid {
        fn cell_count_x(&self) -> i32 {
            self.cell_count_x
        }

        fn cell_count_z(&self) -> i32 {
            self.cell_count_z
        }

        fn is_wrapping(&self) -> bool {
            self.wrapping
        }

        fn metrics(&self) -> HexMetrics {
            self.metrics
        }

        fn center_map(&mut self, x_position: f32) {
            self.centered_at.push(x_position);
        }
    }

    fn make_rig(position: Vec3) -> (World, CameraRig) {
        let mut world = World::new();
        let root = spawn_rig(&mut world, position);
        let rig = CameraRig::new(&mut world, root, RigConfig::default()).unwrap();
        (world, rig)
    }

    fn set_position(world: &mut World, rig: &CameraRig, position: Vec3) {
        let mut root = hierarchy::local_transform(world, rig.nodes().root).unwrap();
        root.translation = position;
        hierarchy::set_local_transform(world, rig.nodes().root, root);
    }

    #[test]
    fn test_new_poses_initial_zoom() {
        let (world, rig) = make_rig(Vec3::ZERO);
        let config = RigConfig::default();

        assert_eq!(rig.zoom(), 1.0);
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), config.tilt_min_angle));
        let stick = hierarchy::local_transform(&world, rig.nodes().stick).unwrap();
        assert!(approx_eq(stick.translation.z, config.stick_max_zoom));
    }

    #[test]
    fn test_new_rejects_broken_hierarchy() {
        let mut world = World::new();
        let root = world.spawn((Transform::IDENTITY,));
        assert!(matches!(
            CameraRig::new(&mut world, root, RigConfig::default()),
            Err(RigError::MissingSwivel)
        ));
    }

    #[test]
    fn test_zoom_clamps_to_closest() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let config = RigConfig::default();
        rig.adjust_zoom(&mut world, -0.5);
        assert!(approx_eq(rig.zoom(), 0.5));

        rig.adjust_zoom(&mut world, 1.0);

        assert_eq!(rig.zoom(), 1.0);
        let stick = hierarchy::local_transform(&world, rig.nodes().stick).unwrap();
        assert!(approx_eq(stick.translation.z, config.stick_max_zoom));
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), config.tilt_min_angle));
    }

    #[test]
    fn test_zoom_out_looks_straight_down() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let config = RigConfig::default();
        rig.adjust_zoom(&mut world, -5.0);

        assert_eq!(rig.zoom(), 0.0);
        let stick = hierarchy::local_transform(&world, rig.nodes().stick).unwrap();
        assert!(approx_eq(stick.translation.z, config.stick_min_zoom));
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), config.tilt_max_angle));
    }

    #[test]
    fn test_zoom_always_in_unit_range() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            rig.adjust_zoom(&mut world, rng.gen_range(-3.0..3.0));
            assert!((0.0..=1.0).contains(&rig.zoom()));
        }
    }

    #[test]
    fn test_rotation_wraps_past_360() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        // 350 degrees, then +20
        rig.adjust_rotation(&mut world, 350.0 / ROTATION_SPEED, 1.0);
        assert!(approx_eq(rig.rotation_angle(), 350.0));
        rig.adjust_rotation(&mut world, 20.0 / ROTATION_SPEED, 1.0);
        assert!(approx_eq(rig.rotation_angle(), 10.0));
    }

    #[test]
    fn test_rotation_wraps_below_zero() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        rig.adjust_rotation(&mut world, -30.0 / ROTATION_SPEED, 1.0);
        assert!(approx_eq(rig.rotation_angle(), 330.0));

        let root = hierarchy::local_transform(&world, rig.nodes().root).unwrap();
        let forward = root.rotation * Vec3::Z;
        // Yaw only: forward stays level
        assert!(forward.y.abs() < EPSILON);
    }

    #[test]
    fn test_tiny_negative_rotation_from_zero_stays_below_360() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        rig.adjust_rotation(&mut world, -1e-9, 1.0);
        assert!((0.0..360.0).contains(&rig.rotation_angle()));
    }

    #[test]
    fn test_rotation_always_normalized() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            rig.adjust_rotation(&mut world, rng.gen_range(-1.0..1.0), rng.gen_range(0.0..0.05));
            assert!((0.0..360.0).contains(&rig.rotation_angle()));
        }
    }

    #[test]
    fn test_tilt_eases_toward_target() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        // Start at 20 degrees (zoom 1); target 20 + 1 * 10 = 30, factor 0.1 * 10 = 1
        rig.adjust_tilt(&mut world, 1.0, 0.1);
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), 30.0));

        // Target 40, factor 0.05 * 10 = 0.5 -> halfway
        rig.adjust_tilt(&mut world, 1.0, 0.05);
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), 35.0));
    }

    #[test]
    fn test_tilt_stays_in_range() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let config = RigConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            rig.adjust_tilt(&mut world, rng.gen_range(-20.0..20.0), rng.gen_range(0.0..0.5));
            let tilt = rig.tilt_angle(&world).unwrap();
            assert!(tilt >= config.tilt_min_angle - EPSILON);
            assert!(tilt <= config.tilt_max_angle + EPSILON);
        }
    }

    #[test]
    fn test_zoom_overrides_tilt_in_same_tick() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let mut grid = TestGrid::new(10, 10, false);
        rig.adjust_zoom(&mut world, -0.5);

        let input = RigInput {
            zoom: 0.25,
            tilt: 1.0,
            ..Default::default()
        };
        rig.tick(&mut world, &mut grid, &input, 0.1);

        let config = RigConfig::default();
        let expected = lerp(config.tilt_max_angle, config.tilt_min_angle, 0.75);
        // The zoom's pitch, not the tilt step from it
        assert!(approx_eq(rig.tilt_angle(&world).unwrap(), expected));
    }

    #[test]
    fn test_clamp_scenario() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        // 10 cells with inner diameter 1.0 -> x in [0, 9.5]
        let mut grid = TestGrid::new(10, 10, false);
        set_position(&mut world, &rig, Vec3::new(20.0, 0.0, 0.0));

        rig.validate_position(&mut world, &mut grid);

        assert!(approx_eq(rig.position(&world).unwrap().x, 9.5));
        assert!(grid.centered_at.is_empty());
    }

    #[test]
    fn test_clamp_holds_for_random_pans() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        let mut grid = TestGrid::new(10, 8, false);
        let metrics = grid.metrics();
        let x_max = max_x(&grid, &metrics);
        let z_max = max_z(&grid, &metrics);
        assert!(approx_eq(z_max, 10.5));

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let input = RigInput {
                horizontal: rng.gen_range(-1.0..1.0),
                vertical: rng.gen_range(-1.0..1.0),
                rotation: rng.gen_range(-1.0..1.0),
                ..Default::default()
            };
            rig.tick(&mut world, &mut grid, &input, 0.05);

            let position = rig.position(&world).unwrap();
            assert!((0.0..=x_max).contains(&position.x));
            assert!((0.0..=z_max).contains(&position.z));
        }
    }

    #[test]
    fn test_wrap_reduces_x_and_recenters_once() {
        let (mut world, mut rig) = make_rig(Vec3::ZERO);
        // Width 10 * 1.0 = 10
        let mut grid = TestGrid::new(10, 10, true);
        let mut rng = StdRng::seed_from_u64(9);

        for tick in 1..=200 {
            let input = RigInput {
                horizontal: rng.gen_range(-1.0..1.0),
                vertical: rng.gen_range(-1.0..1.0),
                ..Default::default()
            };
            rig.tick(&mut world, &mut grid, &input, 0.05);

            let x = rig.position(&world).unwrap().x;
            assert!((0.0..10.0).contains(&x));
            assert_eq!(grid.centered_at.len(), tick);
            assert_eq!(*grid.centered_at.last().unwrap(), x);
        }
    }

    #[test]
    fn test_wrap_past_left_edge() {
        let mut grid = TestGrid::new(10, 10, true);
        let wrapped = wrap_position(Vec3::new(-1.5, 0.0, 99.0), &mut grid);

        assert!(approx_eq(wrapped.x, 8.5));
        // z clamps, it does not wrap
        assert!(approx_eq(wrapped.z, 13.5));
        assert_eq!(grid.centered_at, vec![wrapped.x]);
    }

    #[test]
    fn test_wrap_exact_width_becomes_zero() {
        let mut grid = TestGrid::new(10, 10, true);
        let wrapped = wrap_position(Vec3::new(10.0, 0.0, 2.0), &mut grid);

        assert_eq!(wrapped.x, 0.0);
        assert!(approx_eq(wrapped.z, 2.0));
        assert_eq!(grid.centered_at, vec![0.0]);
    }

    #[test]
    fn test_pan_speed_uses_larger_axis() {
        let (mut world, mut rig) = make_rig(Vec3::new(5.0, 0.0, 5.0));
        let mut grid = TestGrid::new(1000, 1000, false);
        let config = RigConfig::default();

        // Half deflection on both axes: length ~0.707 but damping is 0.5
        rig.adjust_position(&mut world, &mut grid, 0.5, 0.5, 0.01);

        let moved = rig.position(&world).unwrap() - Vec3::new(5.0, 0.0, 5.0);
        let expected = config.move_speed_max_zoom * 0.5 * 0.01;
        assert!(approx_eq(moved.length(), expected));
        assert!(approx_eq(moved.x, moved.z));
    }

    #[test]
    fn test_pan_follows_yaw() {
        let (mut world, mut rig) = make_rig(Vec3::new(50.0, 0.0, 50.0));
        let mut grid = TestGrid::new(1000, 1000, false);
        // Quarter turn: local forward (+Z) becomes +X
        rig.adjust_rotation(&mut world, 90.0 / ROTATION_SPEED, 1.0);
        rig.adjust_position(&mut world, &mut grid, 0.0, 1.0, 0.1);

        let moved = rig.position(&world).unwrap() - Vec3::new(50.0, 0.0, 50.0);
        assert!(moved.x > 0.0);
        assert!(moved.z.abs() < EPSILON);
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let (mut world, mut rig) = make_rig(Vec3::new(3.0, 0.0, 3.0));
        let mut grid = TestGrid::new(10, 10, true);
        let before: Vec<_> = [rig.nodes().root, rig.nodes().swivel, rig.nodes().stick]
            .iter()
            .map(|e| hierarchy::local_transform(&world, *e).unwrap())
            .collect();

        rig.tick(&mut world, &mut grid, &RigInput::default(), 0.016);

        let after: Vec<_> = [rig.nodes().root, rig.nodes().swivel, rig.nodes().stick]
            .iter()
            .map(|e| hierarchy::local_transform(&world, *e).unwrap())
            .collect();
        assert_eq!(before, after);
        assert!(grid.centered_at.is_empty());
    }
}
