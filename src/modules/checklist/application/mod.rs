pub mod progress_tracker;
pub mod service;

pub use progress_tracker::{storage_key, ProgressTracker};
pub use service::ChecklistService;
