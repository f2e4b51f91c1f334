use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// String-keyed, string-valued persistent storage for collected counts.
///
/// No expiry, no transactions: callers do read-modify-write and the last
/// write wins.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
}
