//! Integration tests module
//!
//! This module contains the integration tests for AttractionBuddy, organized
//! by functionality and test scenarios.

pub mod scenarios;
pub mod services;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}
