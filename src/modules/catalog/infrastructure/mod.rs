pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::RebrickableAdapter;
pub use http_client::RateLimitClient;
