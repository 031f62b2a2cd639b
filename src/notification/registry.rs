//! The mapping from channel references to webhook transports.

use crate::config::ChannelConfig;
use crate::core::{LogSink, WebhookTransport};
use crate::notification::NotificationError;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Read-only lookup table of configured Slack channels.
///
/// Built once from configuration; there is no way to add or remove channels
/// afterwards.
pub struct ChannelRegistry {
    channels: HashMap<String, Arc<dyn WebhookTransport>>,
    /// References in configuration order.
    order: Vec<String>,
}

impl ChannelRegistry {
    /// Validates the channel configs and creates one transport per channel.
    ///
    /// Fails with `DuplicateChannelReference` before `factory` is called if
    /// any two configs share a reference.
    pub fn build<F>(
        channel_configs: &[ChannelConfig],
        mut factory: F,
        log: &dyn LogSink,
        verbose: bool,
    ) -> Result<Self, NotificationError>
    where
        F: FnMut(&str) -> Arc<dyn WebhookTransport>,
    {
        let unique: HashSet<&str> = channel_configs
            .iter()
            .map(|cc| cc.reference.as_str())
            .collect();
        if unique.len() != channel_configs.len() {
            return Err(NotificationError::duplicate_references(
                channel_configs.iter().map(|cc| cc.reference.as_str()),
            ));
        }

        let mut channels = HashMap::with_capacity(channel_configs.len());
        let mut order = Vec::with_capacity(channel_configs.len());
        for cc in channel_configs {
            debug!(reference = %cc.reference, "Creating webhook transport");
            channels.insert(cc.reference.clone(), factory(&cc.endpoint_url));
            order.push(cc.reference.clone());
        }

        let registry = Self { channels, order };
        if verbose {
            log.info(&format!(
                "SlackNotificationService initialized with the following channels: {}",
                registry.order.join(", ")
            ));
        }
        Ok(registry)
    }

    /// Builds a registry around already constructed transports.
    ///
    /// A later entry with the same reference replaces an earlier one.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn from_transports<I>(transports: I) -> Self
    where
        I: IntoIterator<Item = (String, Arc<dyn WebhookTransport>)>,
    {
        let mut channels = HashMap::new();
        let mut order = Vec::new();
        for (reference, transport) in transports {
            if channels.insert(reference.clone(), transport).is_none() {
                order.push(reference);
            }
        }
        Self { channels, order }
    }

    /// Looks up the transport for a channel reference.
    pub fn resolve(&self, reference: &str) -> Result<&Arc<dyn WebhookTransport>, NotificationError> {
        self.channels
            .get(reference)
            .ok_or_else(|| NotificationError::ChannelNotFound {
                reference: reference.to_string(),
            })
    }

    /// Channel references in configuration order.
    pub fn references(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
