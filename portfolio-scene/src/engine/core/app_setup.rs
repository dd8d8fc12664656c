use bevy::asset::AssetMetaCheck;
use bevy::asset::io::AssetSourceBuilder;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::assets::{MODEL_SOURCE, RELEASE_SOURCE};

// Crate engine modules
use crate::engine::assets::portfolio_config::PortfolioConfig;
use crate::engine::camera::orbit_camera::{apply_camera_config, camera_controller, spawn_camera};
use crate::engine::scene::lighting::{apply_lighting_config, spawn_lighting};
use crate::engine::systems::fps_tracking::fps_text_update_system;
// Loading
use crate::engine::loading::config_loader::{
    ConfigLoader, ConfigResolved, resolve_config_system, start_config_loading,
};
use crate::engine::loading::environment_loader::{
    EnvironmentLoader, poll_environment_loading, start_environment_loading,
};
use crate::engine::loading::model_loader::{
    ModelLoadFinished, ModelLoader, announce_loading_complete, poll_model_loading,
    start_model_loading,
};
use crate::engine::loading::progress::LoadingProgress;
// Transitions
use crate::engine::core::app_state::{AppState, transition_to_loading, transition_to_running};
use crate::engine::core::window_config::create_window_config;
// Feature plugins
use crate::interaction::InteractionPlugin;
use crate::overlay::OverlayPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    // Asset sources must exist before the asset plugin is built.
    register_asset_sources(&mut app);

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PortfolioConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PortfolioConfig>::new(&["json"]))
        .add_plugins(OverlayPlugin)
        .add_plugins(InteractionPlugin);

    // Initialise resources early
    app.init_resource::<PortfolioConfig>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<EnvironmentLoader>()
        .add_event::<ConfigResolved>()
        .add_event::<ModelLoadFinished>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_config_loading).chain())
        .add_systems(
            Update,
            (resolve_config_system, transition_to_loading)
                .chain()
                .run_if(in_state(AppState::Configuring)),
        )
        .add_systems(
            OnEnter(AppState::Loading),
            (
                apply_camera_config,
                apply_lighting_config,
                start_model_loading,
                start_environment_loading,
            ),
        )
        .add_systems(
            Update,
            (
                poll_model_loading,
                announce_loading_complete,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            poll_environment_loading.run_if(not(in_state(AppState::Configuring))),
        );

    app.add_systems(
        Update,
        camera_controller.run_if(in_state(AppState::Running)),
    );

    // The FPS text node only exists in native builds.
    app.add_systems(Update, fps_text_update_system);

    app
}

/// `models://` and `release://` point at the CDN hosts on the web and at
/// local directories natively.
fn register_asset_sources(app: &mut App) {
    #[cfg(target_arch = "wasm32")]
    let (model_root, release_root) = (constants::assets::MODEL_HOST, constants::assets::RELEASE_HOST);

    #[cfg(not(target_arch = "wasm32"))]
    let (model_root, release_root) = (
        constants::assets::NATIVE_MODEL_ROOT,
        constants::assets::NATIVE_RELEASE_ROOT,
    );

    app.register_asset_source(
        MODEL_SOURCE,
        AssetSourceBuilder::platform_default(model_root, None),
    )
    .register_asset_source(
        RELEASE_SOURCE,
        AssetSourceBuilder::platform_default(release_root, None),
    );
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, config: Res<PortfolioConfig>) {
    println!("=== PORTFOLIO SCENE ===");

    spawn_lighting(&mut commands, &config.lights);
    spawn_camera(&mut commands, &config.camera);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
