//! Overlay panels layered over the scene.
//!
//! Panels are shown by click actions and hidden by their close button, a
//! press on their backdrop, the escape key, or the intro enter button once
//! loading has finished. Every change goes through `OverlayCommand` events.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

/// Panel state machine, command events and the system applying them.
pub mod controller;

/// DOM callback queue feeding overlay commands into the ECS.
pub mod dom_events;

/// Bevy UI panels standing in for the DOM on desktop.
#[cfg(not(target_arch = "wasm32"))]
pub mod native_ui;

/// Presentation surface: overlay display, cursor, links, enter button.
pub mod page;

use controller::{
    OverlayCommand, OverlayCommandSet, OverlayController, apply_overlay_commands, init_overlays,
};
use dom_events::drain_dom_commands;
use page::Page;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayController>()
            .init_resource::<Page>()
            .add_event::<OverlayCommand>()
            .add_systems(OnEnter(AppState::Loading), init_overlays)
            .add_systems(Update, drain_dom_commands.before(OverlayCommandSet))
            .add_systems(Update, apply_overlay_commands.in_set(OverlayCommandSet));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(
            OnEnter(AppState::Loading),
            dom_events::setup_dom_listeners.after(init_overlays),
        );

        #[cfg(not(target_arch = "wasm32"))]
        {
            use controller::escape_key_system;
            use native_ui::{
                native_overlay_buttons, spawn_fps_counter, spawn_native_overlays,
                sync_native_overlays, update_enter_label,
            };

            app.add_systems(Startup, spawn_fps_counter)
                .add_systems(
                    OnEnter(AppState::Loading),
                    spawn_native_overlays.after(init_overlays),
                )
                .add_systems(
                    Update,
                    (escape_key_system, native_overlay_buttons).before(OverlayCommandSet),
                )
                .add_systems(
                    Update,
                    (sync_native_overlays, update_enter_label).after(OverlayCommandSet),
                );
        }
    }
}
