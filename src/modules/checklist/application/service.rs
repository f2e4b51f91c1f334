use std::collections::HashMap;
use std::sync::Arc;

use super::progress_tracker::ProgressTracker;
use crate::modules::catalog::{CatalogRepository, PaginatedFetcher, SetIdentifier};
use crate::modules::checklist::domain::{
    aggregate, ChecklistProgress, ComponentKey, ComponentProgress, LoadState, ProgressStore,
    SetSummary,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_info, log_warn};

/// Owns the checklist for one session: which set is loaded, its components and
/// the collected counts mirrored from the progress store.
///
/// Loads take `&mut self`, so one service never runs two loads at once; callers
/// sharing a service behind a mutex get last-load-wins ordering.
pub struct ChecklistService {
    catalog: Arc<dyn CatalogRepository>,
    fetcher: PaginatedFetcher,
    tracker: ProgressTracker,
    state: LoadState,
    summary: Option<SetSummary>,
    progress: HashMap<ComponentKey, u32>,
}

impl ChecklistService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            fetcher: PaginatedFetcher::new(Arc::clone(&catalog)),
            catalog,
            tracker: ProgressTracker::new(store),
            state: LoadState::Idle,
            summary: None,
            progress: HashMap::new(),
        }
    }

    /// Override the listing page size (defaults to 1000)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.fetcher = self.fetcher.with_page_size(page_size);
        self
    }

    /// Load `raw` as the current set and return the normalized identifier it
    /// settled on.
    ///
    /// Whatever was loaded before is dropped as soon as the load starts. On
    /// failure nothing is left behind: no summary, no counts, no identifier.
    pub async fn load(&mut self, raw: &str) -> AppResult<SetIdentifier> {
        self.state = LoadState::Loading;
        self.summary = None;
        self.progress.clear();

        let timer = TimedOperation::new("load set");
        match self.fetch_summary(raw).await {
            Ok((summary, progress)) => {
                let identifier = summary.identifier.clone();
                timer.finish_with_info(&format!(
                    "{} with {} components",
                    identifier,
                    summary.components.len()
                ));
                self.summary = Some(summary);
                self.progress = progress;
                self.state = LoadState::ready();
                Ok(identifier)
            }
            Err(err) => {
                log_warn!("Loading set '{}' failed: {}", raw.trim(), err);
                self.state = LoadState::failed(err.to_string());
                Err(err)
            }
        }
    }

    async fn fetch_summary(
        &self,
        raw: &str,
    ) -> AppResult<(SetSummary, HashMap<ComponentKey, u32>)> {
        let identifier = SetIdentifier::normalize(raw)?;
        log_info!("Loading set {}", identifier);

        let meta = self.catalog.fetch_set_meta(&identifier).await?;
        let entries = self.fetcher.fetch_all_components(&identifier).await?;
        let components = aggregate(entries)?;

        let summary = SetSummary::new(identifier, meta.display_name, components);
        let progress = self.rehydrate(&summary).await?;
        Ok((summary, progress))
    }

    /// Fresh progress map for `summary`, read from the store
    async fn rehydrate(&self, summary: &SetSummary) -> AppResult<HashMap<ComponentKey, u32>> {
        let mut progress = HashMap::with_capacity(summary.components.len());
        for record in &summary.components {
            let key = record.key();
            let stored = self.tracker.collected(&summary.identifier, &key).await?;
            progress.insert(key, stored.min(record.quantity));
        }
        log_debug!(
            "Rehydrated {} progress entries for set {}",
            progress.len(),
            summary.identifier
        );
        Ok(progress)
    }

    pub async fn increment(&mut self, key: &ComponentKey) -> AppResult<u32> {
        let (set, quantity) = self.locate(key)?;
        let count = self.tracker.increment(&set, key, quantity).await?;
        self.progress.insert(key.clone(), count);
        Ok(count)
    }

    pub async fn decrement(&mut self, key: &ComponentKey) -> AppResult<u32> {
        let (set, quantity) = self.locate(key)?;
        let count = self.tracker.decrement(&set, key, quantity).await?;
        self.progress.insert(key.clone(), count);
        Ok(count)
    }

    fn locate(&self, key: &ComponentKey) -> AppResult<(SetIdentifier, u32)> {
        let summary = self
            .summary
            .as_ref()
            .ok_or_else(|| AppError::ValidationError("No set is loaded".to_string()))?;
        let record = summary.find(key).ok_or_else(|| {
            AppError::NotFound(format!(
                "Part {} is not in set {}",
                key, summary.identifier
            ))
        })?;
        Ok((summary.identifier.clone(), record.quantity))
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn current_identifier(&self) -> Option<&SetIdentifier> {
        self.summary.as_ref().map(|s| &s.identifier)
    }

    pub fn summary(&self) -> Option<&SetSummary> {
        self.summary.as_ref()
    }

    pub fn collected(&self, key: &ComponentKey) -> u32 {
        self.progress.get(key).copied().unwrap_or(0)
    }

    pub fn progress(&self) -> ChecklistProgress {
        let collected = self.progress.values().map(|c| *c as u64).sum();
        let required = self.summary.as_ref().map_or(0, |s| s.total_quantity());
        ChecklistProgress::new(collected, required)
    }

    pub fn component_progress(&self) -> Vec<ComponentProgress> {
        self.summary
            .as_ref()
            .map(|summary| {
                summary
                    .components
                    .iter()
                    .map(|record| ComponentProgress::from_record(record, self.collected(&record.key())))
                    .collect()
            })
            .unwrap_or_default()
    }
}
