pub mod stores;

pub use stores::{InMemoryProgressStore, JsonFileProgressStore};
