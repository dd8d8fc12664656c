//! Scene contents that are not part of the loaded model.
//!
//! Runtime add/remove access, lighting, and the environment map conversion.

/// Add/remove entry point for entities spawned at runtime.
pub mod host;

/// Ambient and directional lights.
pub mod lighting;

/// Equirectangular to cubemap conversion for image based lighting.
pub mod environment;
