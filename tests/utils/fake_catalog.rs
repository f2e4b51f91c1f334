/// In-process catalog double with per-set pages and injectable failures
use async_trait::async_trait;
use brick_checklist_lib::modules::catalog::{
    CatalogRepository, ComponentPage, RawComponentEntry, SetIdentifier, SetMeta,
};
use brick_checklist_lib::shared::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Clone)]
pub struct FakeSet {
    pub display_name: String,
    pub pages: Vec<Vec<RawComponentEntry>>,
    pub page_error: Option<(u32, AppError)>,
}

impl FakeSet {
    pub fn new(display_name: &str, pages: Vec<Vec<RawComponentEntry>>) -> Self {
        Self {
            display_name: display_name.to_string(),
            pages,
            page_error: None,
        }
    }

    pub fn failing_on_page(mut self, page: u32, error: AppError) -> Self {
        self.page_error = Some((page, error));
        self
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    sets: HashMap<String, FakeSet>,
    requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, identifier: &str, set: FakeSet) -> Self {
        self.sets.insert(identifier.to_string(), set);
        self
    }

    /// Requests seen so far, as `meta:<set>` / `page:<set>:<n>:<size>`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    fn lookup(&self, set: &SetIdentifier) -> AppResult<&FakeSet> {
        self.sets.get(set.as_str()).ok_or_else(AppError::set_not_found)
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn fetch_set_meta(&self, set: &SetIdentifier) -> AppResult<SetMeta> {
        self.record(format!("meta:{}", set));
        let fake = self.lookup(set)?;
        Ok(SetMeta::named(fake.display_name.clone()))
    }

    async fn fetch_component_page(
        &self,
        set: &SetIdentifier,
        page: u32,
        page_size: u32,
    ) -> AppResult<ComponentPage> {
        self.record(format!("page:{}:{}:{}", set, page, page_size));
        let fake = self.lookup(set)?;

        if let Some((failing_page, error)) = &fake.page_error {
            if *failing_page == page {
                return Err(error.clone());
            }
        }

        let index = page.saturating_sub(1) as usize;
        Ok(ComponentPage {
            entries: fake.pages.get(index).cloned().unwrap_or_default(),
            has_next: index + 1 < fake.pages.len(),
        })
    }
}
