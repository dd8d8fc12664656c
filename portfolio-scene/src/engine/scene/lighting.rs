use bevy::prelude::*;

use crate::engine::assets::portfolio_config::{LightsConfig, hex_to_color};

#[derive(Component)]
pub struct SceneSun;

pub fn spawn_lighting(commands: &mut Commands, lights: &LightsConfig) {
    commands.insert_resource(ambient_light(lights));
    commands.spawn((
        sun_light(lights),
        sun_transform(lights),
        SceneSun,
        Name::new("scene_sun"),
    ));
}

pub fn ambient_light(lights: &LightsConfig) -> AmbientLight {
    AmbientLight {
        color: hex_to_color(lights.ambient_color),
        brightness: lights.ambient_brightness,
        ..default()
    }
}

pub fn sun_light(lights: &LightsConfig) -> DirectionalLight {
    DirectionalLight {
        color: hex_to_color(lights.directional_color),
        illuminance: lights.directional_illuminance,
        shadows_enabled: true,
        ..default()
    }
}

/// Directional lights shine from their position towards the origin.
pub fn sun_transform(lights: &LightsConfig) -> Transform {
    Transform::from_translation(Vec3::from_array(lights.directional_position))
        .looking_at(Vec3::ZERO, Vec3::Y)
}

/// Re-applies light settings once the runtime config has resolved.
pub fn apply_lighting_config(
    mut commands: Commands,
    config: Res<crate::engine::assets::portfolio_config::PortfolioConfig>,
    mut suns: Query<(&mut DirectionalLight, &mut Transform), With<SceneSun>>,
) {
    commands.insert_resource(ambient_light(&config.lights));
    for (mut light, mut transform) in &mut suns {
        *light = sun_light(&config.lights);
        *transform = sun_transform(&config.lights);
    }
}
