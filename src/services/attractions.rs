//! Attraction provider
//!
//! Turns a profile's location and attraction type into recommendations by
//! mapping the type through the catalog and querying the places provider.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::models::catalog::{AttractionCatalog, CatalogEntry};
use crate::models::user::{Attraction, Location};
use crate::services::places::PlacesProvider;
use crate::services::shortener::LinkShortener;
use crate::utils::errors::Result;

/// Outcome of a "surprise" selection
#[derive(Debug, Clone, PartialEq)]
pub enum SurpriseOutcome {
    /// First category that returned results, the results, and the index picked to show
    Found {
        category: CatalogEntry,
        attractions: Vec<Attraction>,
        pick: usize,
    },
    /// Every attempt came back empty
    Exhausted { attempts: u32 },
}

#[derive(Clone)]
pub struct AttractionService {
    places: Arc<dyn PlacesProvider>,
    shortener: Arc<dyn LinkShortener>,
    catalog: AttractionCatalog,
    radius_meters: u32,
    surprise_attempts: u32,
}

impl AttractionService {
    pub fn new(
        places: Arc<dyn PlacesProvider>,
        shortener: Arc<dyn LinkShortener>,
        catalog: AttractionCatalog,
        radius_meters: u32,
        surprise_attempts: u32,
    ) -> Self {
        Self {
            places,
            shortener,
            catalog,
            radius_meters,
            surprise_attempts,
        }
    }

    pub fn catalog(&self) -> &AttractionCatalog {
        &self.catalog
    }

    /// Attractions of one catalog type around a location
    pub async fn search(&self, location: &Location, entry: &CatalogEntry) -> Result<Vec<Attraction>> {
        let attractions = self
            .places
            .search(location.coordinates, self.radius_meters, &entry.category)
            .await?;

        debug!(
            city = %location.city,
            category = %entry.category,
            count = attractions.len(),
            "Attraction search finished"
        );
        Ok(attractions)
    }

    /// Try random categories until one has results, up to the configured
    /// number of attempts. Provider errors abort the selection.
    pub async fn surprise(&self, location: &Location) -> Result<SurpriseOutcome> {
        for attempt in 1..=self.surprise_attempts {
            let entry = {
                let mut rng = rand::thread_rng();
                match self.catalog.random_entry(&mut rng) {
                    Some(entry) => entry.clone(),
                    None => break,
                }
            };

            let attractions = self.search(location, &entry).await?;
            if attractions.is_empty() {
                debug!(attempt = attempt, category = %entry.category, "Surprise attempt found nothing");
                continue;
            }

            let pick = rand::thread_rng().gen_range(0..attractions.len());
            return Ok(SurpriseOutcome::Found {
                category: entry,
                attractions,
                pick,
            });
        }

        Ok(SurpriseOutcome::Exhausted {
            attempts: self.surprise_attempts,
        })
    }

    /// Short form of a link for SMS; the full link is kept when shortening fails
    pub async fn short_link(&self, link: &str) -> String {
        match self.shortener.shorten(link).await {
            Ok(short) => short,
            Err(e) => {
                warn!(error = %e, "Link shortening failed, sending full link");
                link.to_string()
            }
        }
    }
}
