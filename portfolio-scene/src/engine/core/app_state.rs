use bevy::prelude::*;

use crate::engine::loading::config_loader::ConfigResolved;
use crate::engine::loading::model_loader::ModelLoadFinished;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for `portfolio.json` to load or fail.
    #[default]
    Configuring,
    /// Model and environment map in flight.
    Loading,
    /// Scene interactive. Entered whether or not the model loaded.
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Configuration resolved, start fetching scene assets
pub fn transition_to_loading(
    mut resolved: EventReader<ConfigResolved>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if resolved.read().last().is_none() {
        return;
    }
    println!("→ Configuration resolved, transitioning to Loading state");
    next_state.set(AppState::Loading);
}

// Final transition to running state
pub fn transition_to_running(
    mut finished: EventReader<ModelLoadFinished>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(event) = finished.read().last() else {
        return;
    };
    if event.loaded {
        println!("→ Model ready, transitioning to Running state");
    } else {
        println!("→ Model unavailable, transitioning to Running state without it");
    }
    next_state.set(AppState::Running);
}
