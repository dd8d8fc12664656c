use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::portfolio_config::PortfolioConfig;
use crate::engine::camera::orbit_camera::PortfolioCamera;
use crate::engine::error::LoadError;
use crate::engine::loading::progress::{LoadStatus, LoadingProgress};
use crate::engine::scene::environment::equirect_to_cubemap;

#[derive(Resource, Default)]
pub struct EnvironmentLoader {
    handle: Option<Handle<Image>>,
}

pub fn start_environment_loading(
    mut loader: ResMut<EnvironmentLoader>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    config: Res<PortfolioConfig>,
) {
    println!("Loading environment map from: {}", config.environment.path);
    loader.handle = Some(asset_server.load(config.environment.path.clone()));
    progress.environment = LoadStatus::Loading { attempt: 1 };
}

/// Converts the equirectangular image and lights the camera with it. The
/// source image is dropped afterwards; only the cubemap stays resident.
pub fn poll_environment_loading(
    mut loader: ResMut<EnvironmentLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut images: ResMut<Assets<Image>>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<PortfolioConfig>,
    cameras: Query<Entity, With<PortfolioCamera>>,
) {
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    let result = if let Some(source) = images.get(&handle) {
        equirect_to_cubemap(source, config.environment.face_size)
    } else if let LoadState::Failed(err) = asset_server.load_state(&handle) {
        Err(LoadError::EnvironmentUnavailable {
            path: config.environment.path.clone(),
            reason: err.to_string(),
        })
    } else {
        return;
    };
    loader.handle = None;

    match result {
        Ok(cubemap) => {
            images.remove(&handle);
            let cubemap = images.add(cubemap);
            for camera in &cameras {
                commands.entity(camera).insert(EnvironmentMapLight {
                    diffuse_map: cubemap.clone(),
                    specular_map: cubemap.clone(),
                    intensity: config.environment.intensity,
                    ..default()
                });
            }
            info!(
                "✓ Environment map installed ({}px faces)",
                config.environment.face_size
            );
            progress.environment = LoadStatus::Loaded;
        }
        Err(error) => {
            warn!("Continuing without environment lighting: {}", error);
            progress.environment = LoadStatus::Failed;
        }
    }
}
