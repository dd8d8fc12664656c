use bevy::color::Color;
use bevy::math::Vec3;

/// Linear exposure multiplier applied before tone mapping.
pub const TONE_MAPPING_EXPOSURE: f32 = 0.75;

pub const AMBIENT_COLOR: Color = Color::WHITE;
/// Ambient brightness in cd/m², scaled from a 0.5 unit intensity.
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

pub const DIRECTIONAL_COLOR: Color = Color::WHITE;
/// Directional illuminance in lux, scaled from a 2.0 unit intensity.
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);

/// Uniform scale applied to outline duplicates about their origin.
pub const HIGHLIGHT_SCALE_FACTOR: f32 = 1.15;
/// Outline accent colour, `#00BFFF`.
pub const HIGHLIGHT_COLOR_HEX: u32 = 0x00BFFF;
pub const HIGHLIGHT_OPACITY: f32 = 0.9;
