//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::errors::{AttractionError, Result};

/// Character used to hide phone number digits in logs
pub const MASK_CHAR: char = '*';

/// Number of trailing digits left visible by [`redact_phone`]
pub const VISIBLE_DIGITS: usize = 4;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\+?\d{5,}").expect("phone pattern is valid"))
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?)(?:Z|[+-]\d{2}(?::?\d{2})?)?$")
            .expect("timestamp pattern is valid")
    })
}

/// Mask every digit of a phone number except the last four
pub fn redact_phone(phone: &str) -> String {
    let total_digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let to_mask = total_digits.saturating_sub(VISIBLE_DIGITS);

    let mut seen = 0;
    phone
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= to_mask {
                    return MASK_CHAR;
                }
            }
            c
        })
        .collect()
}

/// Mask anything that looks like a phone number inside free text
pub fn redact_text(text: &str) -> String {
    phone_pattern()
        .replace_all(text, |caps: &regex::Captures| redact_phone(&caps[0]))
        .into_owned()
}

/// Parse a gateway `receivedAt` value.
///
/// The trailing offset (`Z`, `+01:00`, `-0500`) is dropped and the rest is
/// read as a naive local time, matching how the gateway's values compare.
pub fn parse_received_at(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    let naive = timestamp_pattern()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(' ', "T"))
        .ok_or_else(|| AttractionError::Timestamp(raw.to_string()))?;

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&naive, format).ok())
        .ok_or_else(|| AttractionError::Timestamp(raw.to_string()))
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalize each word of a city name for display ("new york" -> "New York")
pub fn title_case(text: &str) -> String {
    normalize_whitespace(text)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Map link for a place that has no website of its own
pub fn map_search_link(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        latitude, longitude
    )
}
