//! In-memory collaborators
//!
//! Stand-ins for the SMS gateway, the geocoder and the places provider that
//! record every call so tests can assert on them.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use AttractionBuddy::models::{Attraction, Coordinates, InboundMessage, Location, Snapshot};
use AttractionBuddy::services::{Geocoder, MessagingTransport, PlacesProvider, TransportReply};
use AttractionBuddy::utils::errors::{AttractionError, Result};

/// SMS gateway fake
#[derive(Default)]
pub struct FakeTransport {
    snapshot: Mutex<Snapshot>,
    fetch_failure: Mutex<Option<u16>>,
    send_failure: Mutex<Option<TransportReply>>,
    register_failure: Mutex<Option<TransportReply>>,
    unregister_failure: Mutex<Option<TransportReply>>,
    sent: Mutex<Vec<(String, String)>>,
    registered: Mutex<Vec<String>>,
    unregistered: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn push_message(&self, sender: &str, text: &str, received_at: &str) {
        self.snapshot
            .lock()
            .unwrap()
            .entry(sender.to_string())
            .or_default()
            .push(InboundMessage::new(text, received_at));
    }

    pub fn fail_fetch(&self, status: u16) {
        *self.fetch_failure.lock().unwrap() = Some(status);
    }

    pub fn fail_send(&self, status: u16, message: &str) {
        *self.send_failure.lock().unwrap() = Some(TransportReply::new(status, message));
    }

    pub fn restore_send(&self) {
        *self.send_failure.lock().unwrap() = None;
    }

    pub fn fail_unregistration(&self, status: u16, message: &str) {
        *self.unregister_failure.lock().unwrap() = Some(TransportReply::new(status, message));
    }

    pub fn fail_registration(&self, status: u16, message: &str) {
        *self.register_failure.lock().unwrap() = Some(TransportReply::new(status, message));
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent_text(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, text)| text.clone())
    }

    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }

    pub fn unregistered(&self) -> Vec<String> {
        self.unregistered.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingTransport for FakeTransport {
    async fn fetch_messages(&self, _team: &str) -> Result<Snapshot> {
        if let Some(status) = *self.fetch_failure.lock().unwrap() {
            return Err(AttractionError::Transport {
                service: "sms gateway",
                status,
                message: "Error downloading message.".to_string(),
            });
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn send(&self, recipient: &str, text: &str) -> TransportReply {
        if let Some(failure) = self.send_failure.lock().unwrap().clone() {
            return failure;
        }
        self.sent.lock().unwrap().push((recipient.to_string(), text.to_string()));
        TransportReply::new(200, "Message sent")
    }

    async fn register(&self, recipient: &str) -> TransportReply {
        if let Some(failure) = self.register_failure.lock().unwrap().clone() {
            return failure;
        }
        self.registered.lock().unwrap().push(recipient.to_string());
        TransportReply::new(200, "Number registered")
    }

    async fn unregister(&self, recipient: &str) -> TransportReply {
        if let Some(failure) = self.unregister_failure.lock().unwrap().clone() {
            return failure;
        }
        self.unregistered.lock().unwrap().push(recipient.to_string());
        TransportReply::new(200, "Number unregistered")
    }
}

/// Geocoder fake knowing a fixed set of cities
#[derive(Default)]
pub struct FakeGeocoder {
    cities: Mutex<HashMap<String, Location>>,
}

impl FakeGeocoder {
    pub fn with_city(self, city: &str, latitude: f64, longitude: f64) -> Self {
        self.cities.lock().unwrap().insert(
            city.to_lowercase(),
            Location {
                city: city.to_string(),
                coordinates: Coordinates { latitude, longitude },
            },
        );
        self
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn resolve(&self, city: &str) -> Result<Option<Location>> {
        Ok(self.cities.lock().unwrap().get(&city.trim().to_lowercase()).cloned())
    }
}

/// Places fake: per-category results, an optional answer for every other
/// category, and an optional failure status
#[derive(Default)]
pub struct FakePlaces {
    results: Mutex<HashMap<String, Vec<Attraction>>>,
    fallback: Mutex<Option<Vec<Attraction>>>,
    failure: Mutex<Option<u16>>,
    calls: Mutex<Vec<String>>,
}

impl FakePlaces {
    pub fn set_results(&self, category: &str, attractions: Vec<Attraction>) {
        self.results.lock().unwrap().insert(category.to_string(), attractions);
    }

    pub fn set_fallback(&self, attractions: Vec<Attraction>) {
        *self.fallback.lock().unwrap() = Some(attractions);
    }

    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesProvider for FakePlaces {
    async fn search(&self, _coordinates: Coordinates, _radius_meters: u32, category: &str) -> Result<Vec<Attraction>> {
        self.calls.lock().unwrap().push(category.to_string());

        if let Some(status) = *self.failure.lock().unwrap() {
            return Err(AttractionError::Transport {
                service: "places",
                status,
                message: "places unavailable".to_string(),
            });
        }

        if let Some(found) = self.results.lock().unwrap().get(category) {
            return Ok(found.clone());
        }
        Ok(self.fallback.lock().unwrap().clone().unwrap_or_default())
    }
}

/// Three museums around Paris
pub fn paris_museums() -> Vec<Attraction> {
    vec![
        Attraction::new("Louvre", "https://www.louvre.fr"),
        Attraction::new("Musée d'Orsay", "https://www.musee-orsay.fr"),
        Attraction::new("Musée Rodin", "https://www.musee-rodin.fr"),
    ]
}
