//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod catalog;
pub mod message;
pub mod user;

// Re-export commonly used models
pub use catalog::{AttractionCatalog, AttractionKind, CatalogEntry, SURPRISE};
pub use message::{parse_snapshot, InboundMessage, SenderMessage, Snapshot};
pub use user::{Attraction, Coordinates, Location, UserProfile};
