pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ChecklistService, ProgressTracker};
pub use domain::{
    ChecklistProgress, ComponentKey, ComponentProgress, ComponentRecord, LoadState,
    ProgressStore, SetSummary,
};
pub use infrastructure::{InMemoryProgressStore, JsonFileProgressStore};
