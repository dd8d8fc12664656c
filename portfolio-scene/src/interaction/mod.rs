//! Pointer picking against the model's clickable groups.
//!
//! Each frame the cursor becomes a world ray. Hover outlines the first
//! registered group under it and switches the cursor; a click performs the
//! group's action.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::overlay::controller::OverlayCommandSet;

/// Click actions, clickable groups and mesh categorisation.
pub mod clickable;

/// Outline duplicates and hover bookkeeping.
pub mod highlight;

/// Group registry, first-hit picking and the hit tester implementations.
pub mod pick;

/// Cursor tracking, press/release click detection and the pointer ray.
pub mod pointer;

/// Screen to ray conversion and ray/box intersection.
pub mod ray;

/// Hover, click and action dispatch systems.
pub mod systems;

use highlight::HighlightState;
use pick::PickController;
use pointer::{PointerRay, PointerState, track_pointer};
use systems::{
    GroupClicked, click_system, dispatch_click_actions, hover_highlight_system,
    setup_outline_material, teardown_highlight,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickController>()
            .init_resource::<HighlightState>()
            .init_resource::<PointerState>()
            .init_resource::<PointerRay>()
            .add_event::<GroupClicked>()
            .add_systems(OnEnter(AppState::Loading), setup_outline_material)
            .add_systems(
                Update,
                (
                    track_pointer,
                    hover_highlight_system,
                    click_system,
                    dispatch_click_actions,
                )
                    .chain()
                    .before(OverlayCommandSet)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(OnExit(AppState::Running), teardown_highlight);

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            systems::apply_window_cursor.run_if(in_state(AppState::Running)),
        );
    }
}
