use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::portfolio_config::{ModelConfig, PortfolioConfig};
use crate::engine::error::LoadError;
use crate::engine::loading::progress::{LoadStatus, LoadingProgress};
use crate::interaction::clickable::{candidate_names, categorize};
use crate::interaction::pick::PickController;
use crate::overlay::page::Page;

/// Sent once when the model has either been categorised or given up on.
#[derive(Event, Debug, Clone)]
pub struct ModelLoadFinished {
    pub loaded: bool,
}

/// Next move after a failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelLoadStep {
    Load(String),
    GiveUp(LoadError),
}

/// Primary-then-fallback model fetch. At most one load is in flight.
#[derive(Resource, Default, Debug)]
pub struct ModelLoader {
    candidates: Vec<String>,
    attempts: usize,
    handle: Option<Handle<Gltf>>,
    scene_root: Option<Entity>,
}

impl ModelLoader {
    pub fn new(model: &ModelConfig) -> Self {
        Self {
            candidates: vec![model.primary.clone(), model.fallback.clone()],
            ..default()
        }
    }

    /// Path of the first attempt. `None` once loading has started.
    pub fn begin(&mut self) -> Option<String> {
        if self.attempts > 0 {
            return None;
        }
        self.attempts = 1;
        self.candidates.first().cloned()
    }

    /// Records a failed attempt and says whether to try the fallback.
    pub fn fail(&mut self, error: LoadError) -> ModelLoadStep {
        self.handle = None;
        match self.candidates.get(self.attempts) {
            Some(next) if self.attempts > 0 => {
                self.attempts += 1;
                ModelLoadStep::Load(next.clone())
            }
            _ => ModelLoadStep::GiveUp(error),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn current_path(&self) -> Option<&str> {
        self.attempts
            .checked_sub(1)
            .and_then(|index| self.candidates.get(index))
            .map(String::as_str)
    }

    pub fn is_in_flight(&self) -> bool {
        self.handle.is_some()
    }

    pub fn scene_root(&self) -> Option<Entity> {
        self.scene_root
    }
}

pub fn start_model_loading(
    mut commands: Commands,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    config: Res<PortfolioConfig>,
) {
    let mut loader = ModelLoader::new(&config.model);
    if let Some(path) = loader.begin() {
        println!("Loading model from: {}", path);
        loader.handle = Some(asset_server.load(path));
        progress.model = LoadStatus::Loading { attempt: 1 };
    }
    commands.insert_resource(loader);
}

/// Spawns the scene once the glTF is ready, or moves on to the fallback.
pub fn poll_model_loading(
    mut loader: ResMut<ModelLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut finished: EventWriter<ModelLoadFinished>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
) {
    let Some(handle) = loader.handle.clone() else {
        return;
    };
    let path = loader.current_path().unwrap_or_default().to_string();

    let error = if let Some(gltf) = gltfs.get(&handle) {
        match gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()) {
            Some(scene) => {
                info!("✓ Model decoded: {} ({} meshes)", path, gltf.meshes.len());
                let root = commands
                    .spawn((SceneRoot(scene), Name::new("portfolio_model")))
                    .observe(on_model_ready)
                    .id();
                loader.handle = None;
                loader.scene_root = Some(root);
                return;
            }
            None => LoadError::ModelEmpty { path },
        }
    } else if let LoadState::Failed(err) = asset_server.load_state(&handle) {
        LoadError::ModelUnavailable {
            path,
            reason: err.to_string(),
        }
    } else {
        return;
    };

    warn!("{}", error);
    match loader.fail(error) {
        ModelLoadStep::Load(next) => {
            info!("Retrying with fallback model: {}", next);
            loader.handle = Some(asset_server.load(next));
            progress.model = LoadStatus::Loading {
                attempt: loader.attempts() as u32,
            };
            info!("Progress: {}", *progress);
        }
        ModelLoadStep::GiveUp(error) => {
            error!("Model loading failed after {} attempts: {}", loader.attempts(), error);
            progress.model = LoadStatus::Failed;
            info!("Progress: {}", *progress);
            finished.write(ModelLoadFinished { loaded: false });
        }
    }
}

type MeshNameQuery<'w, 's> =
    Query<'w, 's, (Option<&'static Name>, Option<&'static ChildOf>), With<Mesh3d>>;

/// Every mesh entity under `root` with the sanitised names it can be matched by.
pub fn model_mesh_names(
    root: Entity,
    children: &Query<&Children>,
    meshes: &MeshNameQuery,
    names: &Query<&Name>,
) -> Vec<(Entity, Vec<String>)> {
    children
        .iter_descendants(root)
        .filter_map(|entity| {
            let (own, parent) = meshes.get(entity).ok()?;
            let parent = parent.map(ChildOf::parent);
            // Primitives of one glTF mesh are siblings under its node.
            let multi_primitive = parent
                .and_then(|parent| children.get(parent).ok())
                .is_some_and(|siblings| {
                    let siblings: &[Entity] = siblings;
                    siblings.iter().filter(|sibling| meshes.contains(**sibling)).count() > 1
                });
            let parent_name = parent
                .and_then(|parent| names.get(parent).ok())
                .map(Name::as_str);
            Some((
                entity,
                candidate_names(own.map(Name::as_str), multi_primitive, parent_name),
            ))
        })
        .collect()
}

/// Categorises the spawned model into clickable groups.
fn on_model_ready(
    trigger: Trigger<SceneInstanceReady>,
    children: Query<&Children>,
    meshes: MeshNameQuery,
    names: Query<&Name>,
    config: Res<PortfolioConfig>,
    mut controller: ResMut<PickController>,
    mut progress: ResMut<LoadingProgress>,
    mut finished: EventWriter<ModelLoadFinished>,
) {
    let found = model_mesh_names(trigger.target(), &children, &meshes, &names);
    info!("Model scene ready with {} meshes", found.len());

    controller.clear();
    for group in categorize(&config.clickables, found) {
        controller.register(group);
    }
    info!(
        "✓ {} of {} clickable groups registered",
        controller.groups().len(),
        config.clickables.len()
    );

    progress.model = LoadStatus::Loaded;
    finished.write(ModelLoadFinished { loaded: true });
}

/// Unblocks the enter button.
pub fn announce_loading_complete(
    mut finished: EventReader<ModelLoadFinished>,
    mut page: ResMut<Page>,
) {
    for event in finished.read() {
        info!("Loading complete (model loaded: {})", event.loaded);
        page.0.mark_loading_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::page::tests::{PageCall, RecordingSurface};
    use bevy::ecs::system::SystemState;

    fn unavailable(path: &str) -> LoadError {
        LoadError::ModelUnavailable {
            path: path.to_string(),
            reason: "404".to_string(),
        }
    }

    #[test]
    fn primary_failure_tries_fallback_exactly_once() {
        let mut loader = ModelLoader::new(&ModelConfig::default());
        let primary = loader.begin().unwrap();
        assert_eq!(primary, constants::assets::PRIMARY_MODEL_PATH);
        assert!(loader.begin().is_none());

        let step = loader.fail(unavailable(&primary));
        assert_eq!(
            step,
            ModelLoadStep::Load(constants::assets::FALLBACK_MODEL_PATH.to_string())
        );
        assert_eq!(loader.current_path(), Some(constants::assets::FALLBACK_MODEL_PATH));

        let step = loader.fail(unavailable("release://model.glb"));
        assert_eq!(step, ModelLoadStep::GiveUp(unavailable("release://model.glb")));
        assert_eq!(loader.attempts(), 2);

        // Nothing left to try.
        assert!(matches!(
            loader.fail(unavailable("again")),
            ModelLoadStep::GiveUp(_)
        ));
        assert_eq!(loader.attempts(), 2);
    }

    #[test]
    fn failure_before_begin_gives_up() {
        let mut loader = ModelLoader::new(&ModelConfig::default());
        assert!(matches!(
            loader.fail(unavailable("x")),
            ModelLoadStep::GiveUp(_)
        ));
    }

    #[test]
    fn mesh_names_follow_nodes_and_primitives() {
        let mut world = World::new();
        let root = world.spawn(Name::new("portfolio_model")).id();
        let book = world.spawn((Name::new("Cube.066"), ChildOf(root))).id();
        let book_mesh = world
            .spawn((Name::new("Cube.066"), Mesh3d(Handle::default()), ChildOf(book)))
            .id();
        let computer = world.spawn((Name::new("Computer"), ChildOf(root))).id();
        let screen = world
            .spawn((
                Name::new("defaultMaterial.005.0"),
                Mesh3d(Handle::default()),
                ChildOf(computer),
            ))
            .id();
        let case = world
            .spawn((
                Name::new("defaultMaterial.005.1"),
                Mesh3d(Handle::default()),
                ChildOf(computer),
            ))
            .id();
        world.spawn((Name::new("lamp"), ChildOf(root)));

        let mut state =
            SystemState::<(Query<&Children>, MeshNameQuery, Query<&Name>)>::new(&mut world);
        let (children, meshes, names) = state.get(&world);
        let found = model_mesh_names(root, &children, &meshes, &names);

        assert_eq!(
            found,
            vec![
                (book_mesh, vec!["Cube066".to_string()]),
                (
                    screen,
                    vec![
                        "defaultMaterial0050".to_string(),
                        "defaultMaterial005".to_string(),
                        "Computer".to_string(),
                    ]
                ),
                (
                    case,
                    vec![
                        "defaultMaterial0051".to_string(),
                        "defaultMaterial005_1".to_string(),
                        "defaultMaterial005".to_string(),
                        "Computer".to_string(),
                    ]
                ),
            ]
        );
    }

    #[derive(Resource, Default)]
    struct Finished(Vec<bool>);

    fn record_finished(mut events: EventReader<ModelLoadFinished>, mut seen: ResMut<Finished>) {
        seen.0.extend(events.read().map(|event| event.loaded));
    }

    #[test]
    fn missing_primary_and_fallback_finish_unloaded() {
        let config = PortfolioConfig {
            model: ModelConfig {
                primary: "missing/primary.glb".to_string(),
                fallback: "missing/fallback.glb".to_string(),
            },
            ..default()
        };

        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                meta_check: bevy::asset::AssetMetaCheck::Never,
                ..default()
            },
        ))
        .init_asset::<Gltf>()
        .insert_resource(config)
        .init_resource::<LoadingProgress>()
        .init_resource::<Finished>()
        .add_event::<ModelLoadFinished>()
        .add_systems(Startup, start_model_loading)
        .add_systems(Update, (poll_model_loading, record_finished).chain());

        for _ in 0..500 {
            app.update();
            if !app.world().resource::<Finished>().0.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
        // A few more frames: nothing else may be attempted or reported.
        for _ in 0..5 {
            app.update();
        }

        assert_eq!(app.world().resource::<Finished>().0, vec![false]);
        let loader = app.world().resource::<ModelLoader>();
        assert_eq!(loader.attempts(), 2);
        assert!(!loader.is_in_flight());
        assert_eq!(loader.current_path(), Some("missing/fallback.glb"));
        assert_eq!(app.world().resource::<LoadingProgress>().model, LoadStatus::Failed);
    }

    #[test]
    fn failed_load_still_signals_completion() {
        let surface = RecordingSurface::default();
        let mut app = App::new();
        app.add_event::<ModelLoadFinished>()
            .insert_resource(Page(Box::new(surface.clone())))
            .add_systems(Update, announce_loading_complete);

        app.world_mut().send_event(ModelLoadFinished { loaded: false });
        app.update();

        assert_eq!(surface.calls(), vec![PageCall::LoadingComplete]);
    }
}
