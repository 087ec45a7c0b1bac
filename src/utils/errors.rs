//! Error handling for AttractionBuddy
//!
//! This module defines the main error type used throughout the application
//! and maps every failure onto the status code that is reported back to callers.

use thiserror::Error;

/// Main error type for AttractionBuddy application
#[derive(Error, Debug)]
pub enum AttractionError {
    #[error("{service} returned {status}: {message}")]
    Transport {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp: {0}")]
    Timestamp(String),
}

/// Result type alias for AttractionBuddy operations
pub type Result<T> = std::result::Result<T, AttractionError>;

impl AttractionError {
    /// Build a transport error from a reqwest failure, keeping the
    /// distinction between timeouts, refused connections and the rest
    pub fn from_request(service: &'static str, error: reqwest::Error) -> Self {
        let status = if error.is_timeout() {
            504
        } else if error.is_connect() {
            503
        } else if let Some(status) = error.status() {
            status.as_u16()
        } else {
            502
        };

        AttractionError::Transport {
            service,
            status,
            message: error.to_string(),
        }
    }

    /// Status code reported to the caller for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AttractionError::Transport { status, .. } => *status,
            AttractionError::Http(e) => e.status().map(|s| s.as_u16()).unwrap_or(502),
            AttractionError::InvalidInput(_) => 400,
            AttractionError::Timestamp(_) => 400,
            AttractionError::Serialization(_) => 500,
            AttractionError::Io(_) => 500,
            AttractionError::UrlParse(_) => 500,
            AttractionError::Config(_) => 500,
        }
    }

    /// Message reported to the caller for this error
    pub fn public_message(&self) -> String {
        match self {
            AttractionError::Transport { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AttractionError::Transport { .. } => true,
            AttractionError::Http(_) => true,
            AttractionError::Io(_) => true,
            AttractionError::InvalidInput(_) => true,
            AttractionError::Timestamp(_) => true,
            AttractionError::Serialization(_) => false,
            AttractionError::UrlParse(_) => false,
            AttractionError::Config(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AttractionError::Config(_) => ErrorSeverity::Critical,
            AttractionError::InvalidInput(_) => ErrorSeverity::Info,
            AttractionError::Timestamp(_) => ErrorSeverity::Warning,
            AttractionError::Transport { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
