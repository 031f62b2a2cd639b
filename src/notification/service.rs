//! The notification service routes block payloads to Slack channels, or logs
//! them as dummy messages when sending is disabled.

use crate::config::ServiceConfig;
use crate::core::{Block, LogSink, WebhookTransport};
use crate::notification::{ChannelRegistry, NotificationError, WebhookClient};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Marker prefixed to messages that were logged instead of sent.
pub const DRY_RUN_MARKER: &str = "[DUMMY SLACK MESSAGE]";

/// Sends formatted notifications to multiple Slack channels.
pub struct NotificationService {
    send_enabled: bool,
    verbose: bool,
    registry: ChannelRegistry,
    log: Arc<dyn LogSink>,
}

impl NotificationService {
    /// Creates a service that posts through a `WebhookClient` per channel.
    pub fn new(config: &ServiceConfig, log: Arc<dyn LogSink>) -> Result<Self, NotificationError> {
        let timeout = config.request_timeout();
        Self::with_transport_factory(config, log, |url| -> Arc<dyn WebhookTransport> {
            Arc::new(WebhookClient::with_timeout(url, timeout))
        })
    }

    /// Creates a service whose channel transports are produced by `factory`.
    pub fn with_transport_factory<F>(
        config: &ServiceConfig,
        log: Arc<dyn LogSink>,
        factory: F,
    ) -> Result<Self, NotificationError>
    where
        F: FnMut(&str) -> Arc<dyn WebhookTransport>,
    {
        let registry = ChannelRegistry::build(&config.channels, factory, log.as_ref(), config.verbose)?;
        Ok(Self::from_parts(config.send_enabled, config.verbose, registry, log))
    }

    /// Assembles a service from an existing registry.
    pub fn from_parts(
        send_enabled: bool,
        verbose: bool,
        registry: ChannelRegistry,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            send_enabled,
            verbose,
            registry,
            log,
        }
    }

    pub fn send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Sends the blocks to Slack, or logs them if sending is disabled.
    ///
    /// In dry-run mode the reference is not checked against the registry, so
    /// unknown channels are logged rather than rejected.
    pub fn dispatch(&self, reference: &str, blocks: &[Block]) -> Result<(), NotificationError> {
        if self.send_enabled {
            return self.deliver(reference, blocks);
        }
        self.log_dummy_message(reference, blocks);
        Ok(())
    }

    /// Sends the blocks to the channel's webhook. Anything but a 200 is a failure.
    #[instrument(skip(self, blocks), fields(count = blocks.len()))]
    pub fn deliver(&self, reference: &str, blocks: &[Block]) -> Result<(), NotificationError> {
        let webhook = self.registry.resolve(reference)?;
        let response = webhook
            .send(blocks)
            .map_err(|source| NotificationError::Transport {
                reference: reference.to_string(),
                source,
            })?;

        if response.status_code != 200 {
            error!(
                status = response.status_code,
                body = %response.body,
                "Failed to send Slack notification"
            );
            return Err(NotificationError::SendFailed {
                reference: reference.to_string(),
                status_code: response.status_code,
                response_body: response.body,
            });
        }

        if self.verbose {
            self.log.info(&format!(
                "Message sent successfully to {} channel. Slack response: {} - {}",
                reference, response.status_code, response.body
            ));
        }
        Ok(())
    }

    fn log_dummy_message(&self, reference: &str, blocks: &[Block]) {
        debug!(reference, "Sending disabled, logging message instead");
        let payload = serde_json::to_string(blocks).unwrap_or_else(|e| format!("<unserializable: {}>", e));
        self.log
            .info(&format!("{} {} : {}", DRY_RUN_MARKER, reference, payload));
    }
}
