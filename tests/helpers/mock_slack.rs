//! A mock Slack webhook endpoint for integration tests.

#![allow(dead_code)]
use slack_notifier::config::{ChannelConfig, ServiceConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a webhook at `/hooks/{reference}` answering with `status` and `body`.
pub async fn mount_webhook(server: &MockServer, reference: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/hooks/{}", reference)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// A service config with one channel per reference, all pointing at `server`.
pub fn service_config(server: &MockServer, references: &[&str]) -> ServiceConfig {
    ServiceConfig {
        channels: references
            .iter()
            .map(|reference| {
                ChannelConfig::new(*reference, format!("{}/hooks/{}", server.uri(), reference))
            })
            .collect(),
        request_timeout_seconds: 2,
        ..Default::default()
    }
}
