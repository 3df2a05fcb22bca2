//! Logging and observability
//!
//! Structured logging via `tracing`:
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use mindrep::logging::init_logging;
//! use mindrep::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of a batch run
///
/// # Example
///
/// ```no_run
/// use mindrep::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!(40, 2, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($succeeded:expr, $failed:expr, $duration:expr) => {
        tracing::info!(
            succeeded = $succeeded,
            failed = $failed,
            duration_ms = $duration.as_millis() as u64,
            "Batch anonymisation completed"
        );
    };
}

/// Log batch progress
///
/// # Example
///
/// ```no_run
/// use mindrep::log_batch_progress;
///
/// log_batch_progress!(100, 1000);
/// ```
#[macro_export]
macro_rules! log_batch_progress {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing batch"
        );
    };
}
