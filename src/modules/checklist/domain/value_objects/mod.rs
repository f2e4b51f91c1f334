pub mod component_key;
pub mod load_state;
pub mod progress;

pub use component_key::ComponentKey;
pub use load_state::LoadState;
pub use progress::{ChecklistProgress, ComponentProgress};
