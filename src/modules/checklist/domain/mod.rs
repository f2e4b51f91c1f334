pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{ComponentRecord, SetSummary};
pub use repositories::ProgressStore;
pub use services::aggregator::aggregate;
pub use value_objects::{ChecklistProgress, ComponentKey, ComponentProgress, LoadState};
