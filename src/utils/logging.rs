//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AttractionBuddy application. Callers pass phone numbers through
//! [`redact_phone`](super::helpers::redact_phone) before handing them to these helpers.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{AttractionError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard must be held for the life of the process, otherwise
/// buffered lines in the file writer are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| AttractionError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(phone: &str, action: &str, status: u16, details: Option<&str>) {
    if status < 400 {
        info!(
            phone = phone,
            action = action,
            status = status,
            details = details,
            "User action performed"
        );
    } else {
        warn!(
            phone = phone,
            action = action,
            status = status,
            details = details,
            "User action rejected"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, status: u16, error: &str, context: Option<&str>) {
    error!(
        api = api,
        status = status,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log the outcome of one polling cycle
pub fn log_poll_cycle(senders: usize, new_messages: usize, handled: usize, failed: usize) {
    if new_messages == 0 {
        debug!(senders = senders, "Poll cycle finished, no new messages");
    } else {
        info!(
            senders = senders,
            new_messages = new_messages,
            handled = handled,
            failed = failed,
            "Poll cycle finished"
        );
    }
}

/// Log a store that had to be reinitialized
pub fn log_storage_recovery(path: &str, reason: &str) {
    warn!(
        path = path,
        reason = reason,
        "Storage file unreadable, reinitialized as empty"
    );
}
