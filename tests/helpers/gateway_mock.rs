//! Mock SMS gateway server for testing
//!
//! This module provides a wiremock server that simulates the team SMS
//! gateway endpoints.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};
use AttractionBuddy::config::MessagingConfig;

/// Mock SMS gateway for testing
pub struct GatewayMockServer {
    pub server: MockServer,
}

impl GatewayMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Messaging config pointing at this server
    pub fn config(&self, send_sms: bool) -> MessagingConfig {
        MessagingConfig {
            base_url: self.server.uri(),
            team_name: "Attraction".to_string(),
            timeout_seconds: 5,
            send_sms,
        }
    }

    /// Setup mock for the team inbox
    pub async fn mock_messages(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/team/getMessages/Attraction"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sending one SMS, expecting exactly `times` calls with `body`
    pub async fn mock_send(&self, body: Value, status: u16, reply: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/sms/send"))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(status).set_body_string(reply))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for registering or unregistering a number
    pub async fn mock_membership(&self, endpoint: &str, phone: u64, status: u16, reply: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/team/{}", endpoint)))
            .and(body_json(json!({ "phoneNumber": phone, "teamName": "Attraction" })))
            .respond_with(ResponseTemplate::new(status).set_body_string(reply))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
