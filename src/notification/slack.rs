//! A blocking client for posting block payloads to a Slack incoming webhook.

use crate::core::{Block, TransportError, WebhookPayload, WebhookResponse, WebhookTransport};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default request timeout for webhook posts.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A client bound to a single Slack webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    webhook_url: String,
    timeout: Duration,
}

impl WebhookClient {
    /// Creates a new `WebhookClient` with the default timeout.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_timeout(webhook_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(webhook_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            timeout,
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn send_request(
        client: reqwest::blocking::Client,
        webhook_url: &str,
        payload: &WebhookPayload<'_>,
    ) -> Result<WebhookResponse, TransportError> {
        match client.post(webhook_url).json(payload).send() {
            Ok(res) => {
                let status_code = res.status().as_u16();
                // A status was received; an unreadable body must not hide it.
                let body = res.text().unwrap_or_default();
                debug!(status = status_code, body = %body, "Slack webhook responded");
                Ok(WebhookResponse { status_code, body })
            }
            Err(e) => {
                error!(error = %e, "HTTP request to Slack failed");
                Err(e.into())
            }
        }
    }
}

impl WebhookTransport for WebhookClient {
    /// Posts `{"blocks": [...]}` and returns the response, whatever its status.
    #[instrument(skip(self, blocks), fields(count = blocks.len()))]
    fn send(&self, blocks: &[Block]) -> Result<WebhookResponse, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        Self::send_request(client, &self.webhook_url, &WebhookPayload { blocks })
    }
}
