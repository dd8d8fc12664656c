use std::fmt;

use bevy::prelude::*;

/// Where one asset is in its load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    /// `attempt` counts from 1; the model may take a second attempt.
    Loading { attempt: u32 },
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loading { .. } => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_resolved: bool,
    pub model: LoadStatus,
    pub environment: LoadStatus,
}

impl LoadingProgress {
    /// Loading counts as complete once the model has settled either way. The
    /// environment map is cosmetic and never holds the scene back.
    pub fn is_complete(&self) -> bool {
        self.config_resolved && self.model.is_settled()
    }

}

impl fmt::Display for LoadingProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config {}, model {}", self.config_resolved, self.model.label())?;
        if let LoadStatus::Loading { attempt } = self.model {
            write!(f, " (attempt {attempt})")?;
        }
        write!(f, ", environment {}", self.environment.label())
    }
}
