use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of the checklist's current set.
///
/// `Idle -> Loading -> Ready | Failed`; `Ready` and `Failed` go back to `Loading`
/// when another load starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready { loaded_at: DateTime<Utc> },
    Failed { message: String },
}

impl LoadState {
    pub fn ready() -> Self {
        LoadState::Ready {
            loaded_at: Utc::now(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        LoadState::Failed {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready { .. } => write!(f, "ready"),
            LoadState::Failed { .. } => write!(f, "failed"),
        }
    }
}
