use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 60.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

/// Initial camera position.
pub const POSITION: Vec3 = Vec3::new(2.0, 2.0, 3.0);

/// Point the orbit controls rotate around.
pub const TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Radians of orbit per pixel of drag.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Fraction of the orbit radius zoomed per scroll line.
pub const ZOOM_SENSITIVITY: f32 = 0.1;

pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 20.0;

/// Pitch limit just short of the poles so the view never flips.
pub const MAX_PITCH: f32 = 1.55;

/// Pointer travel in logical pixels beyond which a press is a drag, not a click.
pub const CLICK_DRAG_TOLERANCE: f32 = 4.0;

/// World units panned per pixel of drag, per unit of orbit radius.
pub const PAN_SENSITIVITY: f32 = 0.0015;

/// Scroll lines represented by one pixel of a pixel-unit wheel event.
pub const PIXELS_PER_SCROLL_LINE: f32 = 0.02;
