//! Message deduplication
//!
//! The gateway returns every message it holds on each poll. New messages are
//! the ones received after the newest message of the previously persisted
//! snapshot (the watermark).

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::database::repositories::MessageRepository;
use crate::models::message::{SenderMessage, Snapshot};
use crate::utils::errors::Result;
use crate::utils::helpers::redact_phone;

#[derive(Clone)]
#[derive(Debug)]
pub struct Deduplicator {
    messages: MessageRepository,
}

impl Deduplicator {
    pub fn new(messages: MessageRepository) -> Self {
        Self { messages }
    }

    /// Newest receive time in a snapshot. `None` sorts before every time and
    /// stands for "nothing processed yet".
    pub fn watermark(snapshot: &Snapshot) -> Option<NaiveDateTime> {
        snapshot
            .values()
            .flatten()
            .filter_map(|message| message.timestamp().ok())
            .max()
    }

    /// Messages in `current` newer than the watermark of `previous`, grouped
    /// by sender and ordered by receive time within each sender.
    pub fn new_messages(previous: &Snapshot, current: &Snapshot) -> Vec<SenderMessage> {
        let previous_mark = Self::watermark(previous);
        if Self::watermark(current) == previous_mark {
            return Vec::new();
        }

        let mut fresh = Vec::new();
        for (sender, messages) in current {
            let mut selected: Vec<SenderMessage> = messages
                .iter()
                .filter_map(|message| match message.timestamp() {
                    Ok(received_at) if Some(received_at) > previous_mark => Some(SenderMessage {
                        sender: sender.clone(),
                        text: message.text.clone(),
                        received_at,
                    }),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(
                            phone = %redact_phone(sender),
                            error = %e,
                            "Skipping message with unreadable timestamp"
                        );
                        None
                    }
                })
                .collect();

            selected.sort_by_key(|message| message.received_at);
            fresh.extend(selected);
        }

        fresh
    }

    /// Compare against the persisted snapshot, then persist `current` in its
    /// place. The snapshot is written before any returned message is handled.
    pub async fn process(&self, current: Snapshot) -> Result<Vec<SenderMessage>> {
        let previous = self.messages.load().await?;
        let fresh = Self::new_messages(&previous, &current);
        self.messages.save(&current).await?;

        debug!(new_messages = fresh.len(), "Snapshot persisted");
        Ok(fresh)
    }
}
