use bevy::prelude::*;

use super::clickable::ClickAction;
use super::highlight::{HighlightState, OutlineMaterial, outline_material};
use super::pick::{GroupPicker, PickController};
use super::pointer::{PointerRay, PointerState};
use crate::engine::assets::portfolio_config::PortfolioConfig;
use crate::engine::scene::host::SceneHost;
use crate::overlay::controller::{OverlayCommand, OverlayController};
use crate::overlay::page::Page;

/// A clickable group was clicked.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GroupClicked {
    pub group: String,
    pub action: ClickAction,
}

pub fn setup_outline_material(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<PortfolioConfig>,
) {
    let material = materials.add(outline_material(&config.highlight));
    commands.insert_resource(OutlineMaterial(material));
}

/// Re-picks whenever the pointer ray, the overlays or the groups change, and
/// swaps outlines when the hovered group changes.
pub fn hover_highlight_system(
    ray: Res<PointerRay>,
    overlays: Res<OverlayController>,
    controller: Res<PickController>,
    mut picker: GroupPicker,
    mut state: ResMut<HighlightState>,
    mut host: SceneHost,
    sources: Query<(&Mesh3d, &GlobalTransform)>,
    material: Res<OutlineMaterial>,
    config: Res<PortfolioConfig>,
    mut page: ResMut<Page>,
) {
    if !(ray.is_changed() || overlays.is_changed() || controller.is_changed()) {
        return;
    }

    let picked = match ray.0 {
        Some(ray) if !overlays.any_visible() => controller.pick(ray, &mut picker),
        _ => None,
    };

    if !state.set_hovered(picked.map(|group| group.name.as_str())) {
        return;
    }

    let released = state.release(&mut host);
    if let Some(group) = picked {
        state.acquire(
            &mut host,
            group,
            &sources,
            &material.0,
            config.highlight.scale_factor,
        );
    }
    debug!(
        "Hover: {:?} ({} outlines released, {} spawned)",
        state.hovered(),
        released,
        state.outlines().len()
    );

    page.0.set_cursor(state.cursor());
}

/// A left press and release in place over a group clicks it. Presses that
/// start under an overlay or turn into an orbit drag do nothing.
pub fn click_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
    ray: Res<PointerRay>,
    overlays: Res<OverlayController>,
    controller: Res<PickController>,
    mut picker: GroupPicker,
    config: Res<PortfolioConfig>,
    mut clicked: EventWriter<GroupClicked>,
) {
    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(position) = pointer.position {
            pointer.press(position, overlays.any_visible());
        }
    }

    if !mouse_button.just_released(MouseButton::Left) {
        return;
    }
    let position = pointer.position;
    if !pointer.release(position, config.picking.click_drag_tolerance) || overlays.any_visible() {
        return;
    }

    let Some(ray) = ray.0 else {
        return;
    };
    if let Some(group) = controller.pick(ray, &mut picker) {
        info!("Clicked '{}' → {} {}", group.name, group.action.kind(), group.action.target());
        clicked.write(GroupClicked {
            group: group.name.clone(),
            action: group.action.clone(),
        });
    }
}

pub fn dispatch_click_actions(
    mut clicked: EventReader<GroupClicked>,
    mut overlay_commands: EventWriter<OverlayCommand>,
    mut page: ResMut<Page>,
) {
    for event in clicked.read() {
        match &event.action {
            ClickAction::Overlay { panel } => {
                overlay_commands.write(OverlayCommand::Show(panel.clone()));
            }
            ClickAction::ExternalLink { url } => page.0.open_link(url),
        }
    }
}

/// Native builds show the hover cursor on the window itself.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_window_cursor(
    mut commands: Commands,
    state: Res<HighlightState>,
    windows: Query<Entity, With<bevy::window::PrimaryWindow>>,
) {
    use crate::overlay::page::CursorStyle;
    use bevy::window::SystemCursorIcon;
    use bevy::winit::cursor::CursorIcon;

    if !state.is_changed() {
        return;
    }
    let icon = match state.cursor() {
        CursorStyle::Pointer => SystemCursorIcon::Pointer,
        CursorStyle::Default => SystemCursorIcon::Default,
    };
    for window in &windows {
        commands.entity(window).insert(CursorIcon::from(icon));
    }
}

pub fn teardown_highlight(mut state: ResMut<HighlightState>, mut host: SceneHost) {
    state.teardown(&mut host);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::portfolio_config::PickPrecision;
    use crate::engine::loading::progress::{LoadStatus, LoadingProgress};
    use crate::interaction::clickable::{candidate_names, categorize};
    use crate::interaction::highlight::OutlineMesh;
    use crate::overlay::controller::{OverlayCommandSet, PanelState, apply_overlay_commands};
    use crate::overlay::page::tests::{PageCall, RecordingSurface};
    use bevy::render::primitives::Aabb;

    const IMDB: &str = "https://www.imdb.com/user/ur205981400/?ref_=hm_nv_profile";

    /// Headless app with the interaction and overlay systems and bounds picking.
    fn app(surface: &RecordingSurface) -> App {
        let mut config = PortfolioConfig::default();
        config.picking.precision = PickPrecision::Bounds;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(config)
            .insert_resource(Assets::<Mesh>::default())
            .insert_resource(OutlineMaterial(Handle::default()))
            .insert_resource(Page(Box::new(surface.clone())))
            .insert_resource(LoadingProgress {
                config_resolved: true,
                model: LoadStatus::Loaded,
                ..default()
            })
            .init_resource::<OverlayController>()
            .init_resource::<PickController>()
            .init_resource::<HighlightState>()
            .init_resource::<PointerState>()
            .init_resource::<PointerRay>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<GroupClicked>()
            .add_event::<OverlayCommand>()
            .add_systems(
                Update,
                (hover_highlight_system, click_system, dispatch_click_actions)
                    .chain()
                    .before(OverlayCommandSet),
            )
            .add_systems(Update, apply_overlay_commands.in_set(OverlayCommandSet));
        app
    }

    /// Unit cube mesh named `name`, centred at `x` on the z = -5 plane.
    fn spawn_mesh(app: &mut App, name: &str, x: f32) -> Entity {
        app.world_mut()
            .spawn((
                Name::new(name.to_string()),
                Mesh3d(Handle::default()),
                Aabb::from_min_max(Vec3::splat(-0.5), Vec3::splat(0.5)),
                GlobalTransform::from(Transform::from_xyz(x, 0.0, -5.0)),
            ))
            .id()
    }

    fn register_groups(app: &mut App, meshes: &[(Entity, &str)]) {
        let table = app.world().resource::<PortfolioConfig>().clickables.clone();
        let groups = categorize(
            &table,
            meshes
                .iter()
                .map(|(entity, name)| (*entity, candidate_names(Some(*name), false, None))),
        );
        let mut controller = app.world_mut().resource_mut::<PickController>();
        for group in groups {
            controller.register(group);
        }
    }

    fn aim_at(app: &mut App, x: f32) {
        let ray = Ray3d::new(Vec3::new(x, 0.0, 0.0), Dir3::NEG_Z);
        app.world_mut().resource_mut::<PointerRay>().0 = Some(ray);
        app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(300.0, 200.0));
    }

    fn click(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        let mut input = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        input.clear();
        input.release(MouseButton::Left);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
    }

    fn close_intro(app: &mut App) {
        app.world_mut()
            .resource_mut::<OverlayController>()
            .hide("intro-overlay");
    }

    fn outline_sources(app: &mut App) -> Vec<Entity> {
        let world = app.world_mut();
        let mut sources: Vec<Entity> = world
            .query::<&OutlineMesh>()
            .iter(world)
            .map(|outline| outline.source)
            .collect();
        sources.sort();
        sources
    }

    #[test]
    fn pointer_over_nothing_hovers_nothing() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let books = spawn_mesh(&mut app, "Cube066", 0.0);
        register_groups(&mut app, &[(books, "Cube066")]);
        close_intro(&mut app);

        aim_at(&mut app, 10.0);
        app.update();

        let state = app.world().resource::<HighlightState>();
        assert_eq!(state.hovered(), None);
        assert!(outline_sources(&mut app).is_empty());
        assert!(!surface.calls().contains(&PageCall::Cursor(crate::overlay::page::CursorStyle::Pointer)));
    }

    #[test]
    fn hover_outlines_exactly_the_group_meshes() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let shoe = spawn_mesh(&mut app, "L", 0.0);
        let other_shoe = spawn_mesh(&mut app, "R", 20.0);
        let books = spawn_mesh(&mut app, "Cube066", 3.0);
        register_groups(
            &mut app,
            &[(shoe, "L"), (other_shoe, "R"), (books, "Cube066")],
        );
        close_intro(&mut app);

        aim_at(&mut app, 0.0);
        app.update();
        let mut expected = vec![shoe, other_shoe];
        expected.sort();
        assert_eq!(
            app.world().resource::<HighlightState>().hovered(),
            Some("runningShoes")
        );
        assert_eq!(outline_sources(&mut app), expected);

        // Same group again: nothing is re-spawned.
        let before: Vec<Entity> = app.world().resource::<HighlightState>().outlines().to_vec();
        aim_at(&mut app, 0.1);
        app.update();
        assert_eq!(app.world().resource::<HighlightState>().outlines(), before.as_slice());

        aim_at(&mut app, 3.0);
        app.update();
        assert_eq!(outline_sources(&mut app), vec![books]);
        for outline in before {
            assert!(app.world().get_entity(outline).is_err());
        }
    }

    #[test]
    fn visible_overlay_suspends_hover() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let books = spawn_mesh(&mut app, "Cube066", 0.0);
        register_groups(&mut app, &[(books, "Cube066")]);

        aim_at(&mut app, 0.0);
        app.update();
        assert_eq!(app.world().resource::<HighlightState>().hovered(), None);

        close_intro(&mut app);
        app.update();
        assert_eq!(app.world().resource::<HighlightState>().hovered(), Some("books"));
    }

    #[test]
    fn clicking_the_folder_opens_the_resume() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let folder = spawn_mesh(&mut app, "grh", 0.0);
        register_groups(&mut app, &[(folder, "grh")]);
        close_intro(&mut app);

        aim_at(&mut app, 0.0);
        click(&mut app);

        let overlays = app.world().resource::<OverlayController>();
        assert_eq!(overlays.state("resume-overlay"), Some(PanelState::Visible));
        assert!(surface.links().is_empty());
        assert!(surface
            .calls()
            .contains(&PageCall::Overlay("resume-overlay".to_string(), true)));
    }

    #[test]
    fn clicking_the_movie_counter_opens_imdb() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let counter = spawn_mesh(&mut app, "Movie_numberator", 0.0);
        register_groups(&mut app, &[(counter, "Movie_numberator")]);
        close_intro(&mut app);

        aim_at(&mut app, 0.0);
        click(&mut app);

        assert_eq!(surface.links(), vec![IMDB.to_string()]);
        let overlays = app.world().resource::<OverlayController>();
        assert!(!overlays.any_visible());
    }

    #[test]
    fn drag_release_does_not_click() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let counter = spawn_mesh(&mut app, "Movie_numberator", 0.0);
        register_groups(&mut app, &[(counter, "Movie_numberator")]);
        close_intro(&mut app);

        aim_at(&mut app, 0.0);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(380.0, 200.0));
        let mut input = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        input.clear();
        input.release(MouseButton::Left);
        app.update();

        assert!(surface.links().is_empty());
    }

    #[test]
    fn click_on_empty_space_does_nothing() {
        let surface = RecordingSurface::default();
        let mut app = app(&surface);
        let counter = spawn_mesh(&mut app, "Movie_numberator", 0.0);
        register_groups(&mut app, &[(counter, "Movie_numberator")]);
        close_intro(&mut app);

        aim_at(&mut app, 10.0);
        click(&mut app);

        assert!(surface.links().is_empty());
        assert!(!app.world().resource::<OverlayController>().any_visible());
    }
}
