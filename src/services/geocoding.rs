//! Geocoding service implementation
//!
//! Resolves the city a user texts in into coordinates using the Geoapify
//! geocoding API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeocodingConfig;
use crate::models::user::{Coordinates, Location};
use crate::utils::errors::{AttractionError, Result};
use crate::utils::helpers::{normalize_whitespace, title_case};
use crate::utils::logging::log_api_error;

const SERVICE: &str = "geocoding";

/// City name to coordinates lookup
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the city is unknown
    async fn resolve(&self, city: &str) -> Result<Option<Location>>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    lat: f64,
    lon: f64,
    city: Option<String>,
}

/// Geoapify geocoding client
#[derive(Clone)]
#[derive(Debug)]
pub struct GeoapifyGeocoder {
    client: Client,
    config: GeocodingConfig,
}

impl GeoapifyGeocoder {
    pub fn new(config: GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("AttractionBuddy/1.0")
            .build()
            .map_err(AttractionError::Http)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Geocoder for GeoapifyGeocoder {
    async fn resolve(&self, city: &str) -> Result<Option<Location>> {
        let city = normalize_whitespace(city);
        if city.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/v1/geocode/search", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, city = %city, "Geocoding city");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("text", city.as_str()),
                ("type", "city"),
                ("format", "json"),
                ("limit", "1"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AttractionError::from_request(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log_api_error(SERVICE, status.as_u16(), &text, Some(&city));
            return Err(AttractionError::Transport {
                service: SERVICE,
                status: status.as_u16(),
                message: text,
            });
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| AttractionError::Transport {
            service: SERVICE,
            status: 502,
            message: format!("Invalid geocoding payload: {}", e),
        })?;

        Ok(body.results.into_iter().next().map(|result| Location {
            city: result.city.unwrap_or_else(|| title_case(&city)),
            coordinates: Coordinates {
                latitude: result.lat,
                longitude: result.lon,
            },
        }))
    }
}
