//! Runtime systems that are not tied to one feature.

/// Frame rate sampling for the native counter.
pub mod fps_tracking;
