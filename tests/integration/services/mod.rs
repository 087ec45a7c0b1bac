//! HTTP client integration tests against wiremock servers

pub mod geoapify_test;
pub mod shortener_test;
