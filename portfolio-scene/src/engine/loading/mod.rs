//! Loading pipeline for the runtime config, the model and the environment map.
//!
//! Config resolves first. Model and environment then load side by side; the
//! scene becomes interactive once the model has loaded or been given up on.

/// `portfolio.json` override loading with fallback to compiled defaults.
pub mod config_loader;

/// HDR environment map fetch and cubemap installation.
pub mod environment_loader;

/// Primary and fallback model fetch, scene spawn and mesh categorisation.
pub mod model_loader;

/// Per-asset load status, gating the enter button.
pub mod progress;
