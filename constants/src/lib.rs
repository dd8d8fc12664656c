//! Compile-time defaults shared by the portfolio scene.
//!
//! Every value here can be overridden at runtime through `portfolio.json`;
//! these are what the scene falls back to when no override is present.

/// Asset locations for the model, its fallback and the environment map.
pub mod assets;

/// Perspective camera and orbit control defaults.
pub mod camera;

/// Mesh name to interactive group table.
pub mod clickables;

/// Overlay panel and button element ids.
pub mod overlays;

/// Lighting, exposure and hover highlight settings.
pub mod render_settings;
