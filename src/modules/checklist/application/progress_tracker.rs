use std::sync::Arc;

use crate::modules::catalog::domain::SetIdentifier;
use crate::modules::checklist::domain::{ComponentKey, ProgressStore};
use crate::shared::errors::AppResult;

const STORAGE_KEY_PREFIX: &str = "lego-checklist";

/// Storage key for one component of one set
pub fn storage_key(set: &SetIdentifier, key: &ComponentKey) -> String {
    format!(
        "{}-{}-{}-{}",
        STORAGE_KEY_PREFIX, set, key.component_id, key.variant_id
    )
}

/// Clamped collected-count mutations against a [`ProgressStore`].
///
/// Counts stay within `0..=quantity`. Stored values above `quantity` (the
/// inventory shrank, or another session wrote the key) are read as `quantity`;
/// a request that would leave the range is a no-op and does not write.
#[derive(Clone)]
pub struct ProgressTracker {
    store: Arc<dyn ProgressStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// Persisted count, 0 when absent or unreadable
    pub async fn collected(&self, set: &SetIdentifier, key: &ComponentKey) -> AppResult<u32> {
        let storage_key = storage_key(set, key);
        let count = match self.store.get(&storage_key).await? {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                log::warn!("Ignoring unreadable count '{}' for {}", raw, storage_key);
                0
            }),
            None => 0,
        };
        Ok(count)
    }

    pub async fn increment(
        &self,
        set: &SetIdentifier,
        key: &ComponentKey,
        quantity: u32,
    ) -> AppResult<u32> {
        let current = self.collected(set, key).await?.min(quantity);
        if current >= quantity {
            return Ok(current);
        }
        self.write(set, key, current + 1).await
    }

    pub async fn decrement(
        &self,
        set: &SetIdentifier,
        key: &ComponentKey,
        quantity: u32,
    ) -> AppResult<u32> {
        let current = self.collected(set, key).await?.min(quantity);
        if current == 0 {
            return Ok(current);
        }
        self.write(set, key, current - 1).await
    }

    async fn write(&self, set: &SetIdentifier, key: &ComponentKey, count: u32) -> AppResult<u32> {
        self.store
            .set(&storage_key(set, key), &count.to_string())
            .await?;
        log::debug!("Set {} component {} now at {}", set, key, count);
        Ok(count)
    }
}
