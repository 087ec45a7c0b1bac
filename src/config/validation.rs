//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;

use crate::models::catalog::SURPRISE;
use crate::utils::errors::{AttractionError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_messaging_config(&settings.messaging)?;
    validate_geocoding_config(&settings.geocoding)?;
    validate_places_config(&settings.places)?;
    validate_shortener_config(&settings.shortener)?;
    validate_polling_config(&settings.polling)?;
    validate_conversation_config(&settings.conversation)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn require_url(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AttractionError::Config(format!("{} URL is required", what)));
    }
    url::Url::parse(value)
        .map_err(|e| AttractionError::Config(format!("{} URL is invalid: {}", what, e)))?;
    Ok(())
}

fn require_timeout(seconds: u64, what: &str) -> Result<()> {
    if seconds == 0 {
        return Err(AttractionError::Config(format!(
            "{} timeout must be greater than 0",
            what
        )));
    }
    Ok(())
}

/// Validate SMS gateway configuration
fn validate_messaging_config(config: &super::MessagingConfig) -> Result<()> {
    require_url(&config.base_url, "SMS gateway")?;
    require_timeout(config.timeout_seconds, "SMS gateway")?;

    if config.team_name.trim().is_empty() {
        return Err(AttractionError::Config("Team name is required".to_string()));
    }

    Ok(())
}

/// Validate geocoding configuration
fn validate_geocoding_config(config: &super::GeocodingConfig) -> Result<()> {
    require_url(&config.base_url, "Geocoding API")?;
    require_timeout(config.timeout_seconds, "Geocoding API")?;

    if config.api_key.is_empty() {
        return Err(AttractionError::Config(
            "Geocoding API key is required (set GEOAPIFY_API_KEY)".to_string(),
        ));
    }

    Ok(())
}

/// Validate places configuration
fn validate_places_config(config: &super::PlacesConfig) -> Result<()> {
    require_url(&config.base_url, "Places API")?;
    require_timeout(config.timeout_seconds, "Places API")?;

    if config.api_key.is_empty() {
        return Err(AttractionError::Config(
            "Places API key is required (set GEOAPIFY_API_KEY)".to_string(),
        ));
    }

    if config.radius_meters == 0 {
        return Err(AttractionError::Config(
            "Search radius must be greater than 0".to_string(),
        ));
    }

    if config.limit == 0 {
        return Err(AttractionError::Config(
            "Places limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate shortener configuration
fn validate_shortener_config(config: &super::ShortenerConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    require_url(&config.base_url, "Shortener")?;
    require_timeout(config.timeout_seconds, "Shortener")
}

/// Validate polling configuration
fn validate_polling_config(config: &super::PollingConfig) -> Result<()> {
    if config.interval_seconds == 0 {
        return Err(AttractionError::Config(
            "Polling interval must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate conversation configuration
fn validate_conversation_config(config: &super::ConversationConfig) -> Result<()> {
    if config.surprise_attempts == 0 {
        return Err(AttractionError::Config(
            "Surprise attempts must be greater than 0".to_string(),
        ));
    }

    // Prompts sample two distinct categories
    if config.catalog.len() < 2 {
        return Err(AttractionError::Config(
            "Attraction catalog needs at least two entries".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &config.catalog {
        let name = entry.name.to_lowercase();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(AttractionError::Config(format!(
                "Invalid catalog name: {:?}",
                entry.name
            )));
        }
        if name == SURPRISE {
            return Err(AttractionError::Config(format!(
                "'{}' is reserved and cannot be a catalog entry",
                SURPRISE
            )));
        }
        if entry.category.is_empty() {
            return Err(AttractionError::Config(format!(
                "Catalog entry '{}' has no provider category",
                entry.name
            )));
        }
        if !seen.insert(name) {
            return Err(AttractionError::Config(format!(
                "Duplicate catalog entry: {}",
                entry.name
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AttractionError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AttractionError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(AttractionError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}
