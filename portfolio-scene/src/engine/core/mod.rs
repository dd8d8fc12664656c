//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers asset sources, the config asset type and feature plugins, and
/// schedules loading and runtime systems per state.
pub mod app_setup;

/// Application state machine and its transitions.
///
/// Moves from configuration through asset loading to the interactive scene.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
