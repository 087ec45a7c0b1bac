//! SMS gateway service implementation
//!
//! This service talks to the team SMS gateway: it pulls every message sent
//! to the team, sends texts, and manages which numbers belong to the team.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::MessagingConfig;
use crate::models::message::{parse_snapshot, Snapshot};
use crate::utils::errors::{AttractionError, Result};
use crate::utils::helpers::redact_phone;
use crate::utils::logging::log_api_error;

const SERVICE: &str = "sms gateway";

/// Status code and body returned by the gateway for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub message: String,
}

impl TransportReply {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<AttractionError> for TransportReply {
    fn from(error: AttractionError) -> Self {
        Self::new(error.status_code(), error.public_message())
    }
}

/// Inbound, outbound and registration side of the SMS gateway
#[async_trait]
pub trait MessagingTransport: Send + Sync {
    /// Every message currently addressed to `team`, keyed by sender
    async fn fetch_messages(&self, team: &str) -> Result<Snapshot>;

    /// Send one text to one recipient
    async fn send(&self, recipient: &str, text: &str) -> TransportReply;

    /// Add a number to the team
    async fn register(&self, recipient: &str) -> TransportReply;

    /// Remove a number from the team
    async fn unregister(&self, recipient: &str) -> TransportReply;
}

/// HTTP client for the SMS gateway
#[derive(Clone)]
#[derive(Debug)]
pub struct SmsGatewayClient {
    client: Client,
    config: MessagingConfig,
}

impl SmsGatewayClient {
    /// Create a new SmsGatewayClient instance
    pub fn new(config: MessagingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("AttractionBuddy/1.0")
            .build()
            .map_err(AttractionError::Http)?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post(&self, path: &str, body: Value) -> TransportReply {
        let url = self.url(path);
        debug!(url = %url, "Calling SMS gateway");

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = AttractionError::from_request(SERVICE, e);
                log_api_error(SERVICE, error.status_code(), &error.public_message(), Some(path));
                return error.into();
            }
        };

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            log_api_error(SERVICE, status, &text, Some(path));
        }

        TransportReply::new(status, text)
    }
}

/// The gateway expects numbers as JSON numbers when they are purely numeric
fn phone_value(phone: &str) -> Value {
    let digits = phone.trim().trim_start_matches('+');
    match digits.parse::<u64>() {
        Ok(number) if !digits.is_empty() => json!(number),
        _ => json!(phone),
    }
}

#[async_trait]
impl MessagingTransport for SmsGatewayClient {
    async fn fetch_messages(&self, team: &str) -> Result<Snapshot> {
        let url = self.url(&format!("/team/getMessages/{}", urlencoding::encode(team)));
        debug!(url = %url, "Fetching team messages");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AttractionError::from_request(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log_api_error(SERVICE, status.as_u16(), &text, Some("getMessages"));
            return Err(AttractionError::Transport {
                service: SERVICE,
                status: status.as_u16(),
                message: "Error downloading message.".to_string(),
            });
        }

        let invalid = |e: &dyn std::fmt::Display| AttractionError::Transport {
            service: SERVICE,
            status: 502,
            message: format!("Invalid messages payload: {}", e),
        };
        let payload = response.json::<Value>().await.map_err(|e| invalid(&e))?;
        parse_snapshot(payload).map_err(|e| invalid(&e))
    }

    async fn send(&self, recipient: &str, text: &str) -> TransportReply {
        if !self.config.send_sms {
            info!(phone = %redact_phone(recipient), text = %text, "SMS sending disabled, message not sent");
            return TransportReply::new(200, "SMS sending disabled");
        }

        let body = json!({
            "phoneNumber": phone_value(recipient),
            "message": text,
        });
        self.post("/sms/send", body).await
    }

    async fn register(&self, recipient: &str) -> TransportReply {
        let body = json!({
            "phoneNumber": phone_value(recipient),
            "teamName": self.config.team_name,
        });
        self.post("/team/registerNumber", body).await
    }

    async fn unregister(&self, recipient: &str) -> TransportReply {
        let body = json!({
            "phoneNumber": phone_value(recipient),
            "teamName": self.config.team_name,
        });
        self.post("/team/unregisterNumber", body).await
    }
}
