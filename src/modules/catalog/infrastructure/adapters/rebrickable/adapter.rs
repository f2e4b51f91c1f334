use crate::{
    modules::catalog::domain::{CatalogRepository, ComponentPage, SetIdentifier, SetMeta},
    modules::catalog::infrastructure::http_client::RateLimitClient,
    shared::config::DEFAULT_BASE_URL,
    shared::errors::{AppError, AppResult},
};
use async_trait::async_trait;

use super::mapper::RebrickableMapper;
use super::models::{SetDetails, SetPartsResponse};

/// Rebrickable v3 REST adapter.
///
/// Authenticates with `Authorization: key <api_key>`; the key is supplied by
/// configuration and never appears in URLs or logs.
pub struct RebrickableAdapter {
    http_client: RateLimitClient,
    base_url: String,
    mapper: RebrickableMapper,
}

impl RebrickableAdapter {
    pub fn new(api_key: &str) -> Self {
        Self::with_client(RateLimitClient::for_rebrickable(), api_key, DEFAULT_BASE_URL)
    }

    /// Create adapter with custom HTTP client and base URL (for testing)
    pub fn with_client(http_client: RateLimitClient, api_key: &str, base_url: &str) -> Self {
        Self {
            http_client: http_client.with_authorization(format!("key {}", api_key)),
            base_url: base_url.trim_end_matches('/').to_string(),
            mapper: RebrickableMapper::new(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn set_url(&self, set: &SetIdentifier) -> String {
        format!(
            "{}/lego/sets/{}/",
            self.base_url,
            urlencoding::encode(set.as_str())
        )
    }

    pub fn parts_url(&self, set: &SetIdentifier, page: u32, page_size: u32) -> String {
        format!(
            "{}/lego/sets/{}/parts/?page={}&page_size={}",
            self.base_url,
            urlencoding::encode(set.as_str()),
            page,
            page_size
        )
    }
}

/// Any 404 from the set endpoints means the set number does not exist
fn set_not_found(err: AppError) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::set_not_found(),
        other => other,
    }
}

#[async_trait]
impl CatalogRepository for RebrickableAdapter {
    async fn fetch_set_meta(&self, set: &SetIdentifier) -> AppResult<SetMeta> {
        log::info!("Rebrickable: Getting set details for '{}'", set);

        let details: SetDetails = self
            .http_client
            .get(&self.set_url(set), "set details")
            .await
            .map_err(set_not_found)?;

        Ok(self.mapper.map_set_meta(details))
    }

    async fn fetch_component_page(
        &self,
        set: &SetIdentifier,
        page: u32,
        page_size: u32,
    ) -> AppResult<ComponentPage> {
        let response: SetPartsResponse = self
            .http_client
            .get(&self.parts_url(set, page, page_size), "parts")
            .await
            .map_err(set_not_found)?;

        Ok(self.mapper.map_page(response))
    }
}
