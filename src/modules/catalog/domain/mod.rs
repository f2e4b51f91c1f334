pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{ComponentPage, RawComponentEntry, SetIdentifier, SetMeta};
pub use repositories::CatalogRepository;
