//! Middleware module
//!
//! This module contains the policies applied around every command handler

pub mod audit;
pub mod logging;

// Re-export commonly used middleware
pub use audit::AuditLog;
pub use logging::LoggingMiddleware;
