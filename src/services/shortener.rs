//! Link shortener service implementation
//!
//! Attraction links are texted over SMS, so they are shortened with an
//! is.gd-compatible endpoint (`?format=simple&url=...` returning plain text).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ShortenerConfig;
use crate::utils::errors::{AttractionError, Result};

const SERVICE: &str = "shortener";

#[async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, url: &str) -> Result<String>;
}

/// Returns links unchanged, used when shortening is disabled
#[derive(Debug, Clone, Default)]
pub struct PassthroughShortener;

#[async_trait]
impl LinkShortener for PassthroughShortener {
    async fn shorten(&self, url: &str) -> Result<String> {
        Ok(url.to_string())
    }
}

#[derive(Clone)]
#[derive(Debug)]
pub struct HttpShortener {
    client: Client,
    config: ShortenerConfig,
}

impl HttpShortener {
    pub fn new(config: ShortenerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("AttractionBuddy/1.0")
            .build()
            .map_err(AttractionError::Http)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LinkShortener for HttpShortener {
    async fn shorten(&self, url: &str) -> Result<String> {
        url::Url::parse(url)?;
        debug!(url = url, "Shortening link");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("format", "simple"), ("url", url)])
            .send()
            .await
            .map_err(|e| AttractionError::from_request(SERVICE, e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AttractionError::Transport {
                service: SERVICE,
                status: status.as_u16(),
                message: body,
            });
        }

        let short = body.trim();
        let is_link = url::Url::parse(short)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !is_link {
            return Err(AttractionError::Transport {
                service: SERVICE,
                status: 502,
                message: format!("Unexpected shortener response: {}", short),
            });
        }

        Ok(short.to_string())
    }
}
