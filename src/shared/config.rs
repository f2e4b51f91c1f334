use crate::shared::errors::{AppError, AppResult};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://rebrickable.com/api/v3";
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_STORE_PATH: &str = "lego-checklist.json";

/// Runtime configuration, read from the process environment (and `.env` via dotenvy)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
    pub store_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("REBRICKABLE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("REBRICKABLE_API_KEY is not set".to_string())
            })?;

        let base_url = lookup("REBRICKABLE_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let page_size = match lookup("BRICK_CHECKLIST_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    AppError::ConfigError(format!("Invalid BRICK_CHECKLIST_PAGE_SIZE: {}", raw))
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let store_path = lookup("BRICK_CHECKLIST_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        Ok(Self {
            api_key,
            base_url,
            page_size,
            store_path,
        })
    }
}
