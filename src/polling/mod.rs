//! Polling module
//!
//! The single driver of the bot: fetch the team inbox, keep only new
//! messages, and run each one through the dispatcher in order.

pub mod dedup;

pub use dedup::Deduplicator;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::handlers::commands::dispatch;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::redact_phone;
use crate::utils::logging::log_poll_cycle;

/// What one polling cycle did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub senders: usize,
    pub new_messages: usize,
    pub handled: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct Poller {
    ctx: AppContext,
    dedup: Deduplicator,
    interval: Duration,
    max_cycles: Option<u64>,
}

impl Poller {
    pub fn new(ctx: AppContext) -> Self {
        let dedup = Deduplicator::new(ctx.messages.clone());
        let interval = Duration::from_secs(ctx.settings.polling.interval_seconds);
        let max_cycles = ctx.settings.polling.max_cycles;

        Self {
            ctx,
            dedup,
            interval,
            max_cycles,
        }
    }

    /// Fetch, deduplicate and handle one batch of messages.
    ///
    /// A fetch failure returns before the stored snapshot is touched.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let snapshot = self
            .ctx
            .services
            .messaging
            .fetch_messages(self.ctx.team_name())
            .await?;

        let mut report = CycleReport {
            senders: snapshot.len(),
            ..CycleReport::default()
        };

        let fresh = self.dedup.process(snapshot).await?;
        report.new_messages = fresh.len();

        for message in &fresh {
            let response = dispatch(&self.ctx, &message.sender, &message.text).await;
            debug!(
                phone = %redact_phone(&message.sender),
                received_at = %message.received_at,
                status = response.status,
                "Message handled"
            );
            if response.is_success() {
                report.handled += 1;
            } else {
                report.failed += 1;
            }
        }

        log_poll_cycle(report.senders, report.new_messages, report.handled, report.failed);
        Ok(report)
    }

    /// Poll until ctrl-c, or until `max_cycles` cycles have run.
    /// Shutdown is only observed between cycles.
    pub async fn run(&self) -> Result<()> {
        info!(
            interval_seconds = self.interval.as_secs(),
            team = %self.ctx.team_name(),
            "Polling started"
        );

        let mut cycles: u64 = 0;
        loop {
            if let Err(e) = self.run_cycle().await {
                warn!(
                    error = %e,
                    status = e.status_code(),
                    recoverable = e.is_recoverable(),
                    "Poll cycle skipped"
                );
            }

            cycles += 1;
            if self.max_cycles.is_some_and(|max| cycles >= max) {
                info!(cycles = cycles, "Configured number of cycles reached");
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        info!(cycles = cycles, "Polling stopped");
        Ok(())
    }
}
