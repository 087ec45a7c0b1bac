//! Logging middleware
//!
//! Wraps every command handler invocation: the outcome is written to the
//! audit log and emitted as a structured tracing event, with the sender's
//! phone number redacted in both.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::handlers::commands::{Command, HandlerResponse};
use crate::middleware::audit::AuditLog;
use crate::utils::helpers::{redact_phone, truncate_text};
use crate::utils::logging::log_user_action;

/// Longest reply excerpt kept in tracing events
const DETAILS_LENGTH: usize = 80;

/// Handler runs slower than this are reported
const SLOW_HANDLER: Duration = Duration::from_secs(5);

#[derive(Clone)]
#[derive(Debug)]
pub struct LoggingMiddleware {
    audit: AuditLog,
}

impl LoggingMiddleware {
    pub fn new(audit: AuditLog) -> Self {
        Self { audit }
    }

    /// Run a handler and record its outcome
    pub async fn wrap<F>(&self, command: Command, phone: &str, handler: F) -> HandlerResponse
    where
        F: Future<Output = HandlerResponse>,
    {
        let started = Instant::now();
        let response = handler.await;
        let elapsed = started.elapsed();

        let redacted = redact_phone(phone);
        log_user_action(
            &redacted,
            command.keyword(),
            response.status,
            Some(&truncate_text(&response.text, DETAILS_LENGTH)),
        );

        if elapsed > SLOW_HANDLER {
            warn!(
                command = command.keyword(),
                duration_ms = elapsed.as_millis() as u64,
                "Slow handler detected"
            );
        } else {
            debug!(
                command = command.keyword(),
                duration_ms = elapsed.as_millis() as u64,
                "Handler completed"
            );
        }

        let record = format!("{} {}: {}", command.keyword(), redacted, response.text);
        if let Err(e) = self.audit.record(response.status, &record).await {
            warn!(error = %e, path = %self.audit.path().display(), "Failed to write audit record");
        }

        response
    }
}
