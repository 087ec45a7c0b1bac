//! Test helpers module
//!
//! This module provides utilities and helpers for testing AttractionBuddy:
//! in-memory collaborators, a wiremock SMS gateway and a unified test context.

pub mod fakes;
pub mod gateway_mock;

pub use fakes::*;
pub use gateway_mock::*;
pub use test_context::*;
