use thiserror::Error;

/// Result type for asset loading and conversion.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failures surfaced by the loading pipeline. None of these stop the
/// application; they are logged and the scene carries on without the asset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("model unavailable at {path}: {reason}")]
    ModelUnavailable { path: String, reason: String },

    #[error("model at {path} has no scene to spawn")]
    ModelEmpty { path: String },

    #[error("environment map unavailable at {path}: {reason}")]
    EnvironmentUnavailable { path: String, reason: String },

    #[error("environment map not convertible: {0}")]
    EnvironmentFormat(String),

    #[error("config document rejected: {0}")]
    Config(String),
}
