pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::PaginatedFetcher;
pub use domain::{
    CatalogRepository, ComponentPage, RawComponentEntry, SetIdentifier, SetMeta,
};
pub use infrastructure::{RateLimitClient, RebrickableAdapter};
