use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::assets::CONFIG_PATH;

use crate::engine::assets::portfolio_config::PortfolioConfig;
use crate::engine::error::LoadError;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Event, Debug, Clone)]
pub struct ConfigResolved {
    /// `false` when the compiled defaults are in use.
    pub from_document: bool,
}

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<PortfolioConfig>>,
}

pub fn start_config_loading(mut loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    println!("Loading configuration from: {}", CONFIG_PATH);
    loader.handle = Some(asset_server.load(CONFIG_PATH));
}

/// Swaps in the loaded document, or keeps the defaults when it is missing or
/// malformed. Either way configuration counts as resolved.
pub fn resolve_config_system(
    mut loader: ResMut<ConfigLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut resolved: EventWriter<ConfigResolved>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<PortfolioConfig>>,
) {
    if progress.config_resolved {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let from_document = if let Some(config) = configs.get(handle) {
        info!(
            "✓ Configuration loaded: {} clickable groups, {} overlays",
            config.clickables.len(),
            config.overlays.len()
        );
        commands.insert_resource(config.clone());
        true
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        warn!("{}; using compiled defaults", LoadError::Config(err.to_string()));
        false
    } else {
        return;
    };

    loader.handle = None;
    progress.config_resolved = true;
    resolved.write(ConfigResolved { from_document });
}
