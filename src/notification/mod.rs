//! Routing of Slack messages to named webhook channels.
//!
//! The `ChannelRegistry` maps channel references to webhook transports, and
//! the `NotificationService` either delivers block payloads through them or
//! logs them when sending is disabled.
pub mod registry;
pub mod service;
pub mod slack;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use thiserror::Error;

pub use registry::ChannelRegistry;
pub use service::NotificationService;
pub use slack::WebhookClient;

use crate::core::TransportError;

#[derive(Error, Debug)]
pub enum NotificationError {
    /// `references` is every configured reference, sorted and comma-joined.
    #[error("Duplicate reference for slack notification channel references=[{references}]")]
    DuplicateChannelReference { references: String },

    #[error("Slack notification channel '{reference}' not found.")]
    ChannelNotFound { reference: String },

    #[error("Failed to send Slack notification to channel '{reference}'. Status Code: {status_code}, Response: {response_body}")]
    SendFailed {
        reference: String,
        status_code: u16,
        response_body: String,
    },

    #[error("HTTP request to Slack channel '{reference}' failed: {source}")]
    Transport {
        reference: String,
        #[source]
        source: TransportError,
    },
}

impl NotificationError {
    pub(crate) fn duplicate_references<'a, I>(references: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut references: Vec<&str> = references.into_iter().collect();
        references.sort_unstable();
        Self::DuplicateChannelReference {
            references: references.join(", "),
        }
    }
}
