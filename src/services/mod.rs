//! Services module
//!
//! This module contains the outbound integrations (SMS gateway, geocoding,
//! places, link shortening) and the attraction provider built on them.

pub mod attractions;
pub mod geocoding;
pub mod messaging;
pub mod notification;
pub mod places;
pub mod shortener;

// Re-export commonly used services
pub use attractions::{AttractionService, SurpriseOutcome};
pub use geocoding::{GeoapifyGeocoder, Geocoder};
pub use messaging::{MessagingTransport, SmsGatewayClient, TransportReply};
pub use notification::{MessageTemplate, NotificationService};
pub use places::{GeoapifyPlaces, PlacesProvider};
pub use shortener::{HttpShortener, LinkShortener, PassthroughShortener};

use std::sync::Arc;

use tracing::info;

use crate::config::settings::Settings;
use crate::models::catalog::AttractionCatalog;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub messaging: Arc<dyn MessagingTransport>,
    pub geocoder: Arc<dyn Geocoder>,
    pub attractions: AttractionService,
    pub notifications: NotificationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by the HTTP clients
    pub fn new(settings: &Settings) -> Result<Self> {
        let messaging: Arc<dyn MessagingTransport> =
            Arc::new(SmsGatewayClient::new(settings.messaging.clone())?);
        let geocoder: Arc<dyn Geocoder> = Arc::new(GeoapifyGeocoder::new(settings.geocoding.clone())?);
        let places: Arc<dyn PlacesProvider> = Arc::new(GeoapifyPlaces::new(settings.places.clone())?);
        let shortener: Arc<dyn LinkShortener> = if settings.shortener.enabled {
            Arc::new(HttpShortener::new(settings.shortener.clone())?)
        } else {
            Arc::new(PassthroughShortener)
        };

        info!(
            team = %settings.messaging.team_name,
            send_sms = settings.messaging.send_sms,
            shortener = settings.shortener.enabled,
            "Services initialized"
        );

        Ok(Self::from_parts(settings, messaging, geocoder, places, shortener))
    }

    /// Assemble the factory from already built collaborators
    pub fn from_parts(
        settings: &Settings,
        messaging: Arc<dyn MessagingTransport>,
        geocoder: Arc<dyn Geocoder>,
        places: Arc<dyn PlacesProvider>,
        shortener: Arc<dyn LinkShortener>,
    ) -> Self {
        let attractions = AttractionService::new(
            places,
            shortener,
            AttractionCatalog::new(settings.conversation.catalog.clone()),
            settings.places.radius_meters,
            settings.conversation.surprise_attempts,
        );
        let notifications = NotificationService::new(messaging.clone());

        Self {
            messaging,
            geocoder,
            attractions,
            notifications,
        }
    }
}
