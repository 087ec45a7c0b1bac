//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::SURPRISE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub title: String,
    pub link: String,
}

impl Attraction {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
        }
    }
}

/// Persisted conversation state of one phone number.
///
/// Fields are only changed through the methods below so that the cursor
/// stays inside `attractions` and a new location always drops the old
/// type and results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub phone_number: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub attraction_type: Option<String>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub cursor: usize,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(phone_number: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            location: None,
            attraction_type: None,
            attractions: Vec::new(),
            cursor: 0,
            last_updated: Utc::now(),
        }
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
        self.attraction_type = None;
        self.attractions.clear();
        self.cursor = 0;
    }

    pub fn set_attraction_type(&mut self, attraction_type: &str) {
        self.attraction_type = Some(attraction_type.to_lowercase());
    }

    pub fn set_attractions(&mut self, attractions: Vec<Attraction>) {
        self.attractions = attractions;
        self.cursor = 0;
    }

    pub fn is_surprise(&self) -> bool {
        self.attraction_type.as_deref() == Some(SURPRISE)
    }

    pub fn current(&self) -> Option<&Attraction> {
        self.attractions.get(self.cursor)
    }

    /// The entry after the cursor, without moving it
    fn peek_next(&self) -> Option<&Attraction> {
        self.attractions.get(self.cursor + 1)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.attractions.is_empty() && self.cursor + 1 >= self.attractions.len()
    }

    /// Move to the next entry. Returns false when the list is already exhausted.
    pub fn advance_cursor(&mut self) -> bool {
        if self.peek_next().is_none() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
