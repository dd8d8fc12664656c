//! Runtime configuration document and its compiled defaults.

/// `portfolio.json` schema: model, environment, camera, lights, highlight,
/// picking, clickable table and overlay list.
pub mod portfolio_config;
