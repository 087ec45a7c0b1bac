//! Attraction type catalog

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sentinel attraction type: pick a random category on every request
pub const SURPRISE: &str = "surprise";

/// One user-facing attraction type and the provider category behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
}

impl CatalogEntry {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    /// Built-in catalog, keyed on Geoapify place categories
    pub fn defaults() -> Vec<CatalogEntry> {
        [
            ("museum", "entertainment.museum"),
            ("zoo", "entertainment.zoo"),
            ("aquarium", "entertainment.aquarium"),
            ("theatre", "entertainment.culture.theatre"),
            ("cinema", "entertainment.cinema"),
            ("gallery", "entertainment.culture.gallery"),
            ("themepark", "entertainment.theme_park"),
            ("park", "leisure.park"),
            ("castle", "tourism.sights.castle"),
            ("sights", "tourism.sights"),
            ("viewpoint", "tourism.attraction.viewpoint"),
            ("beach", "beach"),
            ("restaurant", "catering.restaurant"),
            ("cafe", "catering.cafe"),
        ]
        .iter()
        .map(|(name, category)| CatalogEntry::new(name, category))
        .collect()
    }
}

/// Result of resolving a user's TYPE argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttractionKind<'a> {
    Surprise,
    Category(&'a CatalogEntry),
}

/// The fixed set of attraction types users can pick from
#[derive(Debug, Clone)]
pub struct AttractionCatalog {
    entries: Vec<CatalogEntry>,
}

impl AttractionCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Look up a catalog entry by its user-facing name, ignoring case
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve a TYPE argument to either the surprise sentinel or a catalog entry
    pub fn resolve(&self, input: &str) -> Option<AttractionKind<'_>> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(SURPRISE) {
            return Some(AttractionKind::Surprise);
        }
        self.find(input).map(AttractionKind::Category)
    }

    pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CatalogEntry> {
        if self.entries.is_empty() {
            return None;
        }
        Some(&self.entries[rng.gen_range(0..self.entries.len())])
    }

    /// Two different entries, used as examples in prompts.
    /// The second draw is repeated until it differs from the first.
    pub fn random_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&CatalogEntry, &CatalogEntry)> {
        if self.entries.len() < 2 {
            return None;
        }
        let first = rng.gen_range(0..self.entries.len());
        let mut second = rng.gen_range(0..self.entries.len());
        while second == first {
            second = rng.gen_range(0..self.entries.len());
        }
        Some((&self.entries[first], &self.entries[second]))
    }
}

impl Default for AttractionCatalog {
    fn default() -> Self {
        Self::new(CatalogEntry::defaults())
    }
}
