//! Handlers module
//!
//! This module contains the SMS command handlers and the dispatcher that
//! routes each incoming text to one of them.

pub mod commands;

// Re-export commonly used handler types
pub use commands::{dispatch, Command, HandlerResponse};
