use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{ComponentPage, SetIdentifier, SetMeta};
use crate::shared::errors::AppResult;

/// Read access to the external parts catalog.
///
/// Implementations map an upstream 404 to `AppError::NotFound` and any other
/// non-success status to `AppError::FetchError`; they never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch set metadata (display name and friends)
    async fn fetch_set_meta(&self, set: &SetIdentifier) -> AppResult<SetMeta>;

    /// Fetch one page (1-based) of the set's component listing
    async fn fetch_component_page(
        &self,
        set: &SetIdentifier,
        page: u32,
        page_size: u32,
    ) -> AppResult<ComponentPage>;
}
