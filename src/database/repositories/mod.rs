//! Storage repositories module
//!
//! This module contains the repositories for persisted profiles and messages

pub mod user;
pub mod message;

// Re-export repositories
pub use user::{UserRepository, ProfileMap};
pub use message::MessageRepository;
