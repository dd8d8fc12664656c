use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ray::pointer_ray;
use crate::engine::camera::orbit_camera::PortfolioCamera;

/// Cursor position and the press that may turn into a click.
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    /// Logical pixels from the window's top-left. `None` off-window.
    pub position: Option<Vec2>,
    press: Option<Press>,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Vec2,
    blocked: bool,
}

impl PointerState {
    /// Starts a press. A `blocked` press (overlay up) can never click.
    pub fn press(&mut self, at: Vec2, blocked: bool) {
        self.press = Some(Press { origin: at, blocked });
    }

    /// Ends the press. Returns `true` when it counts as a click: it started
    /// unblocked and the pointer stayed within `tolerance` pixels.
    pub fn release(&mut self, at: Option<Vec2>, tolerance: f32) -> bool {
        let Some(press) = self.press.take() else {
            return false;
        };
        let Some(at) = at else {
            return false;
        };
        !press.blocked && press.origin.distance(at) <= tolerance
    }
}

/// World-space ray under the cursor, updated only when it changes.
#[derive(Resource, Default, Debug, PartialEq)]
pub struct PointerRay(pub Option<Ray3d>);

pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<PortfolioCamera>>,
    mut pointer: ResMut<PointerState>,
    mut ray: ResMut<PointerRay>,
) {
    let position = windows.single().ok().and_then(Window::cursor_position);
    if pointer.position != position {
        pointer.position = position;
    }

    let next = position.and_then(|position| {
        let (camera, camera_transform) = cameras.single().ok()?;
        let viewport = camera.logical_viewport_size()?;
        pointer_ray(position, viewport, camera_transform, camera.clip_from_view())
    });
    ray.set_if_neq(PointerRay(next));
}
