//! Perspective camera and orbit controls around the portfolio model.
//!
//! Left drag orbits, right drag pans, the wheel zooms. Input is ignored while
//! an overlay panel covers the canvas.

/// Orbit camera resource, camera spawning and the input controller system.
pub mod orbit_camera;
