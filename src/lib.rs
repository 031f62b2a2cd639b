/// Slack notifier - send formatted messages to named Slack channels
///
/// This library routes Block Kit payloads to Slack incoming webhooks by
/// channel reference, with a dry-run mode that logs messages instead of
/// sending them, and helpers for building common block layouts.
pub mod cli;
pub mod config;
pub mod core;
pub mod formatting;
pub mod notification;

// Re-export core types for convenience
pub use crate::core::*;
pub use notification::{ChannelRegistry, NotificationError, NotificationService, WebhookClient};
