//! State management module
//!
//! This module holds the application context and the per-user conversation
//! state derived from stored profiles

pub mod context;
pub mod conversation;

// Re-export commonly used state components
pub use context::AppContext;
pub use conversation::ConversationState;
