//! Core domain types and service traits for the Slack notifier
//!
//! This module defines the message block model that travels over the wire
//! and the trait contracts that the dispatcher depends on.

use serde::{Deserialize, Serialize};

/// The markup format tag attached to every text object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Mrkdwn,
}

/// A text object nested inside section and context blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub format: TextFormat,
    pub text: String,
}

impl TextObject {
    /// Creates a mrkdwn text object.
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Mrkdwn,
            text: text.into(),
        }
    }
}

/// One visual unit of a Slack message.
///
/// Serializes to the Block Kit shape expected by incoming webhooks, e.g.
/// `{"type":"divider"}` or `{"type":"section","text":{"type":"mrkdwn","text":"..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Section { text: TextObject },
    Divider,
    Context { elements: Vec<TextObject> },
}

/// The JSON body posted to an incoming webhook.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub blocks: &'a [Block],
}

/// What the remote endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Raw response body, e.g. `ok` or `invalid_payload`
    pub body: String,
}

/// Failure of the transport itself, before any HTTP status was received.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

// =============================================================================
// Service Traits
// =============================================================================

/// Posts block payloads to a single webhook endpoint.
pub trait WebhookTransport: Send + Sync {
    /// Sends the blocks and returns the endpoint's response.
    ///
    /// # Returns
    /// * `Ok(WebhookResponse)` for any HTTP status, including non-2xx
    /// * `Err` only when no response could be obtained (connection, timeout)
    fn send(&self, blocks: &[Block]) -> Result<WebhookResponse, TransportError>;
}

/// Receives the informational lines the notifier emits.
pub trait LogSink: Send + Sync {
    fn info(&self, line: &str);
}

/// A `LogSink` that forwards every line to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn info(&self, line: &str) {
        tracing::info!("{}", line);
    }
}
