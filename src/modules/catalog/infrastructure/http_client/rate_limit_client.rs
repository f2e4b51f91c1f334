//! Rate-limited HTTP client for the catalog API
//!
//! Every request waits for the governor quota before it is sent. Failures are
//! reported once and never retried: the caller aborts the whole load.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter as GovernorRateLimiter,
};
use reqwest::{Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

pub type DirectRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// HTTP client that paces requests and decodes JSON bodies
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    user_agent: String,
    provider_name: String,
    authorization: Option<String>,
}

impl RateLimitClient {
    /// Client tuned for Rebrickable (about 1 req/sec sustained, short bursts allowed)
    pub fn for_rebrickable() -> Self {
        Self::new(
            "Rebrickable",
            Self::create_rate_limiter(1.0, 3),
            format!("brick-checklist/{}", env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(3600) // Effectively disabled
        };

        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(provider_name: &str, rate_limiter: DirectRateLimiter, user_agent: String) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            user_agent,
            provider_name: provider_name.to_string(),
            authorization: None,
        }
    }

    /// Send `Authorization: <value>` with every request
    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// GET `url` and decode the JSON body.
    ///
    /// `what` names the resource for error messages ("parts", "set details").
    /// 404 becomes `AppError::NotFound`, any other non-success `AppError::FetchError`.
    pub async fn get<T>(&self, url: &str, what: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        LogContext::api_call(&self.provider_name, url, "", None);
        let started = Instant::now();

        let response = self.send(url).await.map_err(|e| {
            AppError::ApiError(format!("{} API request failed: {}", self.provider_name, e))
        })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            url,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} resource not found: {}",
                self.provider_name, what
            )));
        }

        if !status.is_success() {
            log::warn!(
                "{} API returned error {} for {}",
                self.provider_name,
                status,
                what
            );
            return Err(AppError::fetch_failed(status, what));
        }

        self.parse_response(response).await
    }

    async fn send(&self, url: &str) -> Result<Response, reqwest::Error> {
        let mut request_builder = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        if let Some(ref authorization) = self.authorization {
            request_builder = request_builder.header("Authorization", authorization);
        }

        request_builder.send().await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                preview(&response_text, 200)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
