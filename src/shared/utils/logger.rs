use log::{debug, error, info};
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

const CRATE_TARGET: &str = "brick_checklist_lib";
const MODULES_TARGET: &str = "brick_checklist_lib::modules::";

/// Initialize the logging system
/// This should be called once at application startup; `RUST_LOG` overrides the defaults
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module(CRATE_TARGET, log::LevelFilter::Debug) // More verbose for our code
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .parse_env("RUST_LOG")
            .format(|buf, record| {
                let target = record.target();
                if let Some(rest) = target.strip_prefix(MODULES_TARGET) {
                    // brick_checklist_lib::modules::catalog::... -> [LEVEL] [catalog] message
                    let module = rest.split("::").next().unwrap_or("");
                    writeln!(buf, "[{}] [{}] {}", record.level(), module, record.args())
                } else if target.starts_with(CRATE_TARGET) {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                } else {
                    writeln!(buf, "[{}] [{}] {}", record.level(), target, record.args())
                }
            })
            .try_init();

        debug!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log pagination progress
    pub fn page_progress(set: &str, page: u32, entries: usize, has_next: bool) {
        debug!(
            "Fetch: set {} page {} returned {} entries (more: {})",
            set, page, entries, has_next
        );
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
