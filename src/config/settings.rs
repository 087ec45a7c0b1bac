//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::catalog::CatalogEntry;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub messaging: MessagingConfig,
    pub geocoding: GeocodingConfig,
    pub places: PlacesConfig,
    pub shortener: ShortenerConfig,
    pub storage: StorageConfig,
    pub polling: PollingConfig,
    pub conversation: ConversationConfig,
    pub logging: LoggingConfig,
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    pub base_url: String,
    pub team_name: String,
    pub timeout_seconds: u64,
    /// When false, outbound texts are logged instead of sent
    pub send_sms: bool,
}

/// Geocoding API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

/// Places API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesConfig {
    pub base_url: String,
    pub api_key: String,
    pub radius_meters: u32,
    pub limit: u32,
    pub timeout_seconds: u64,
}

/// Link shortener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortenerConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub messages_path: PathBuf,
    pub users_path: PathBuf,
}

/// Polling loop configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    pub interval_seconds: u64,
    pub max_cycles: Option<u64>,
}

/// Conversation behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationConfig {
    pub surprise_attempts: u32,
    pub catalog_url: String,
    pub sample_cities: Vec<String>,
    pub catalog: Vec<CatalogEntry>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_name: String,
    pub audit_path: PathBuf,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Built-in defaults are layered under an optional `config.toml` and
    /// `ATTRACTION__SECTION__KEY` environment variables. API keys may also be
    /// given as plain `GEOAPIFY_API_KEY`, which is how the `.env` file ships them.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Same as [`Settings::new`] with an explicit configuration file name
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("ATTRACTION")
                    .prefix_separator("__")
                    .separator("__"),
            );

        if let Ok(key) = std::env::var("GEOAPIFY_API_KEY") {
            builder = builder
                .set_override("geocoding.api_key", key.clone())?
                .set_override("places.api_key", key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AttractionError> {
        super::validation::validate_settings(self)
    }

    /// Render the settings as TOML, used to bootstrap a config file
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            messaging: MessagingConfig {
                base_url: "http://hackathons.masterschool.com:3030".to_string(),
                team_name: "Attraction".to_string(),
                timeout_seconds: 10,
                send_sms: true,
            },
            geocoding: GeocodingConfig {
                base_url: "https://api.geoapify.com".to_string(),
                api_key: String::new(),
                timeout_seconds: 10,
            },
            places: PlacesConfig {
                base_url: "https://api.geoapify.com".to_string(),
                api_key: String::new(),
                radius_meters: 5000,
                limit: 10,
                timeout_seconds: 10,
            },
            shortener: ShortenerConfig {
                enabled: true,
                base_url: "https://is.gd/create.php".to_string(),
                timeout_seconds: 5,
            },
            storage: StorageConfig {
                messages_path: PathBuf::from("storage/messages.json"),
                users_path: PathBuf::from("storage/users.json"),
            },
            polling: PollingConfig {
                interval_seconds: 20,
                max_cycles: None,
            },
            conversation: ConversationConfig {
                surprise_attempts: 3,
                catalog_url: "https://apidocs.geoapify.com/docs/places/#categories".to_string(),
                sample_cities: ["Paris", "Lisbon", "Berlin", "Rome", "Prague", "Vienna"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                catalog: CatalogEntry::defaults(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
                file_name: "attractionbuddy.log".to_string(),
                audit_path: PathBuf::from("logs/audit.log"),
            },
        }
    }
}
