//! Places service implementation
//!
//! Looks up named points of interest of one category around a point using
//! the Geoapify places API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::PlacesConfig;
use crate::models::user::{Attraction, Coordinates};
use crate::utils::errors::{AttractionError, Result};
use crate::utils::helpers::map_search_link;
use crate::utils::logging::log_api_error;

const SERVICE: &str = "places";

/// Coordinates + category to attractions lookup.
///
/// An empty list is a valid answer and is distinct from a transport error.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn search(
        &self,
        coordinates: Coordinates,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<Attraction>>;
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: PlaceProperties,
}

#[derive(Debug, Deserialize)]
struct PlaceProperties {
    name: Option<String>,
    lat: f64,
    lon: f64,
    website: Option<String>,
}

impl PlacesResponse {
    /// Named places only, in the order the API ranked them
    fn into_attractions(self) -> Vec<Attraction> {
        self.features
            .into_iter()
            .filter_map(|feature| {
                let props = feature.properties;
                let title = props.name.filter(|n| !n.trim().is_empty())?;
                let link = props
                    .website
                    .filter(|w| !w.trim().is_empty())
                    .unwrap_or_else(|| map_search_link(props.lat, props.lon));
                Some(Attraction { title, link })
            })
            .collect()
    }
}

/// Geoapify places client
#[derive(Clone)]
#[derive(Debug)]
pub struct GeoapifyPlaces {
    client: Client,
    config: PlacesConfig,
}

impl GeoapifyPlaces {
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("AttractionBuddy/1.0")
            .build()
            .map_err(AttractionError::Http)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyPlaces {
    async fn search(
        &self,
        coordinates: Coordinates,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<Attraction>> {
        let url = format!("{}/v2/places", self.config.base_url.trim_end_matches('/'));
        let filter = format!(
            "circle:{},{},{}",
            coordinates.longitude, coordinates.latitude, radius_meters
        );
        let limit = self.config.limit.to_string();

        debug!(url = %url, category = category, filter = %filter, "Searching places");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("categories", category),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AttractionError::from_request(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log_api_error(SERVICE, status.as_u16(), &text, Some(category));
            return Err(AttractionError::Transport {
                service: SERVICE,
                status: status.as_u16(),
                message: text,
            });
        }

        let body: PlacesResponse = response.json().await.map_err(|e| AttractionError::Transport {
            service: SERVICE,
            status: 502,
            message: format!("Invalid places payload: {}", e),
        })?;

        Ok(body.into_attractions())
    }
}
