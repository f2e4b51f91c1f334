pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryProgressStore;
pub use json_file::JsonFileProgressStore;
