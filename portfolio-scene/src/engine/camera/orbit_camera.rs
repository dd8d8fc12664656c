use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::view::{ColorGrading, ColorGradingGlobal};
use constants::camera::{
    MAX_DISTANCE, MAX_PITCH, MIN_DISTANCE, ORBIT_SENSITIVITY, PAN_SENSITIVITY,
    PIXELS_PER_SCROLL_LINE, ZOOM_SENSITIVITY,
};

use crate::engine::assets::portfolio_config::{CameraConfig, PortfolioConfig};
use crate::overlay::controller::OverlayController;

/// Marks the single scene camera.
#[derive(Component)]
pub struct PortfolioCamera;

/// Spherical camera placement around a target point.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Rotation about +Y, zero looking down -Z.
    pub yaw: f32,
    /// Elevation above the target's horizontal plane.
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn from_config(camera: &CameraConfig) -> Self {
        Self::from_position(
            Vec3::from_array(camera.position),
            Vec3::from_array(camera.target),
        )
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Rotate by a pointer drag in pixels. Dragging down raises the camera.
    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + drag.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Positive `lines` moves towards the target.
    pub fn zoom(&mut self, lines: f32) {
        let factor = (1.0 - lines * ZOOM_SENSITIVITY).max(0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Slide the target in the view plane so the scene follows the pointer.
    pub fn pan(&mut self, drag: Vec2) {
        let transform = self.transform();
        let scale = self.distance * PAN_SENSITIVITY;
        self.target += (-drag.x * *transform.right() + drag.y * *transform.up()) * scale;
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

pub fn perspective(camera: &CameraConfig) -> Projection {
    Projection::from(PerspectiveProjection {
        fov: camera.fov_degrees.to_radians(),
        near: camera.near,
        far: camera.far,
        ..default()
    })
}

/// Exposure is given as a linear multiplier; colour grading takes stops.
pub fn color_grading(camera: &CameraConfig) -> ColorGrading {
    ColorGrading {
        global: ColorGradingGlobal {
            exposure: camera.exposure.max(f32::EPSILON).log2(),
            ..default()
        },
        ..default()
    }
}

pub fn spawn_camera(commands: &mut Commands, camera: &CameraConfig) {
    let orbit = OrbitCamera::from_config(camera);
    commands.spawn((
        Camera3d::default(),
        perspective(camera),
        orbit.transform(),
        Tonemapping::AcesFitted,
        color_grading(camera),
        Msaa::Sample4,
        PortfolioCamera,
        Name::new("portfolio_camera"),
    ));
    commands.insert_resource(orbit);
}

/// Re-applies projection, exposure and placement once the runtime config has
/// resolved.
pub fn apply_camera_config(
    config: Res<PortfolioConfig>,
    mut orbit: ResMut<OrbitCamera>,
    mut cameras: Query<(&mut Projection, &mut ColorGrading, &mut Transform), With<PortfolioCamera>>,
) {
    *orbit = OrbitCamera::from_config(&config.camera);
    for (mut projection, mut grading, mut transform) in &mut cameras {
        *projection = perspective(&config.camera);
        *grading = color_grading(&config.camera);
        *transform = orbit.transform();
    }
}

pub fn camera_controller(
    mut cameras: Query<&mut Transform, With<PortfolioCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    overlays: Res<OverlayController>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * PIXELS_PER_SCROLL_LINE,
        })
        .sum();

    // The panel backdrop owns the pointer while it is up.
    if overlays.any_visible() {
        return;
    }

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(mouse_delta);
        }
    }
    if scroll.abs() > f32::EPSILON {
        orbit.zoom(scroll);
    }

    if !orbit.is_changed() {
        return;
    }
    for mut transform in &mut cameras {
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_round_trips_through_spherical_form() {
        let orbit = OrbitCamera::from_position(Vec3::new(2.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(orbit.eye().abs_diff_eq(Vec3::new(2.0, 2.0, 3.0), 1e-4));
        assert!((orbit.distance - 14.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn camera_looks_at_target() {
        let orbit = OrbitCamera::default();
        let transform = orbit.transform();
        let to_target = (orbit.target - transform.translation).normalize();
        assert!(transform.forward().dot(to_target) > 0.9999);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, 10_000.0));
        assert!((orbit.pitch - MAX_PITCH).abs() < 1e-6);
        orbit.orbit(Vec2::new(0.0, -20_000.0));
        assert!((orbit.pitch + MAX_PITCH).abs() < 1e-6);
    }

    #[test]
    fn zoom_stays_within_limits() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(5.0);
        }
        assert!((orbit.distance - MIN_DISTANCE).abs() < 1e-6);
        for _ in 0..100 {
            orbit.zoom(-5.0);
        }
        assert!((orbit.distance - MAX_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn pan_moves_target_but_keeps_distance() {
        let mut orbit = OrbitCamera::default();
        let before = orbit.clone();
        orbit.pan(Vec2::new(40.0, 0.0));
        assert_ne!(orbit.target, before.target);
        assert!((orbit.distance - before.distance).abs() < 1e-6);
        assert!((orbit.target.y - before.target.y).abs() < 1e-4);
    }

    #[test]
    fn exposure_becomes_stops() {
        let grading = color_grading(&CameraConfig::default());
        assert!((grading.global.exposure - 0.75f32.log2()).abs() < 1e-6);
    }
}
