//! AttractionBuddy SMS Bot
//!
//! An SMS bot that recommends points of interest in a city. Users text
//! keyword commands to subscribe, pick a destination and an attraction type,
//! and page through recommendations. This library provides the command
//! dispatcher, the per-user conversation flow, the outbound integrations and
//! the polling loop that drives them.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod polling;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AttractionError, Result};

// Re-export main components for easy access
pub use handlers::{dispatch, Command, HandlerResponse};
pub use polling::{CycleReport, Deduplicator, Poller};
pub use services::ServiceFactory;
pub use state::{AppContext, ConversationState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
