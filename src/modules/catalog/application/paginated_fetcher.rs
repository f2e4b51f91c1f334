use crate::modules::catalog::domain::{CatalogRepository, RawComponentEntry, SetIdentifier};
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use std::sync::Arc;

/// Upper bound on pages for one set; a catalog that never clears `next` aborts here
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Walks a set's component listing page by page.
///
/// Pages are requested strictly in order (1, 2, 3, ...) and one at a time: the
/// listing exposes only a `next` cursor, so there is nothing to parallelize against.
/// Any failure aborts the walk and no partial listing is returned.
pub struct PaginatedFetcher {
    catalog: Arc<dyn CatalogRepository>,
    page_size: u32,
    max_pages: u32,
}

impl PaginatedFetcher {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub async fn fetch_all_components(
        &self,
        set: &SetIdentifier,
    ) -> AppResult<Vec<RawComponentEntry>> {
        let mut all_entries = Vec::new();
        let mut page = 1;

        loop {
            if page > self.max_pages {
                return Err(AppError::ApiError(format!(
                    "pagination did not terminate for set {} after {} pages",
                    set, self.max_pages
                )));
            }

            let batch = self
                .catalog
                .fetch_component_page(set, page, self.page_size)
                .await?;

            LogContext::page_progress(set.as_str(), page, batch.entries.len(), batch.has_next);
            all_entries.extend(batch.entries);

            if !batch.has_next {
                break;
            }
            page += 1;
        }

        log::info!(
            "Fetched {} component entries for set {} across {} page(s)",
            all_entries.len(),
            set,
            page
        );
        Ok(all_entries)
    }
}
