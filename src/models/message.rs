//! Inbound SMS message model

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::utils::errors::{AttractionError, Result};
use crate::utils::helpers::{parse_received_at, redact_phone};

/// A message as delivered by the SMS gateway, nested under its sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub received_at: String,
}

/// Missing and null string fields both read as empty
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl InboundMessage {
    pub fn new(text: &str, received_at: &str) -> Self {
        Self {
            text: text.to_string(),
            received_at: received_at.to_string(),
        }
    }

    /// Receive time with the gateway's offset suffix dropped
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        parse_received_at(&self.received_at)
    }
}

/// Everything the gateway currently holds, keyed by sender
pub type Snapshot = BTreeMap<String, Vec<InboundMessage>>;

/// Build a snapshot from a raw gateway payload.
///
/// The gateway returns its whole history on every poll, so one malformed
/// entry must not hide the rest: senders whose value is not a list and
/// entries that are not messages are dropped with a warning. Only a payload
/// that is not an object at all is an error.
pub fn parse_snapshot(payload: Value) -> Result<Snapshot> {
    let Value::Object(senders) = payload else {
        return Err(AttractionError::InvalidInput(
            "messages payload is not an object keyed by sender".to_string(),
        ));
    };

    let mut snapshot = Snapshot::new();
    for (sender, entries) in senders {
        let Value::Array(entries) = entries else {
            warn!(phone = %redact_phone(&sender), "Skipping sender whose messages are not a list");
            continue;
        };

        let messages = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<InboundMessage>(entry) {
                Ok(message) => Some(message),
                Err(e) => {
                    warn!(phone = %redact_phone(&sender), error = %e, "Skipping malformed message");
                    None
                }
            })
            .collect();
        snapshot.insert(sender, messages);
    }

    Ok(snapshot)
}

/// A message pulled out of a snapshot, ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderMessage {
    pub sender: String,
    pub text: String,
    pub received_at: NaiveDateTime,
}
