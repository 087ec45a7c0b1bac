//! Storage module
//!
//! This module handles the JSON documents the bot persists between polls

pub mod repositories;
pub mod store;

// Re-export commonly used storage components
pub use repositories::{UserRepository, MessageRepository, ProfileMap};
pub use store::JsonStore;
