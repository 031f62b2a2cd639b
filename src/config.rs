//! Configuration management for the Slack notifier
//!
//! This module defines the `Config` struct and its sub-structs. It uses the
//! `figment` crate to layer built-in defaults, an optional TOML file,
//! `SLACK_NOTIFIER_`-prefixed environment variables and command-line flags.
//!
//! Boolean environment overrides must be spelled `true` or `false`, e.g.
//! `SLACK_NOTIFIER_VERBOSE=true`; `1` and `0` are rejected as integers.

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Settings for the notification service itself.
    #[serde(flatten)]
    pub service: ServiceConfig,
}

/// Configuration for the notification service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// The Slack channels messages can be routed to.
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
    /// Send messages to Slack; when false they are only logged.
    #[serde(default = "default_send_enabled")]
    pub send_enabled: bool,
    /// Log channel setup and successful sends.
    #[serde(default)]
    pub verbose: bool,
    /// Timeout for a single webhook request, in seconds.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

/// A single Slack channel reachable through an incoming webhook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Logical name used to address the channel, e.g. "alerts".
    pub reference: String,
    /// The Slack incoming webhook URL.
    pub endpoint_url: String,
}

impl ChannelConfig {
    pub fn new(reference: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            endpoint_url: endpoint_url.into(),
        }
    }
}

fn default_send_enabled() -> bool {
    true
}

fn default_request_timeout_seconds() -> u64 {
    10
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channels: vec![],
            send_enabled: default_send_enabled(),
            verbose: false,
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service: ServiceConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration by layering defaults, the TOML file named by
    /// `--config` (if any), environment variables and CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = &cli.config {
            // `Toml::file` silently skips missing files; an explicit path must exist.
            if !path.exists() {
                bail!("configuration file not found at {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment
            // e.g. SLACK_NOTIFIER_SEND_ENABLED=false
            .merge(Env::prefixed("SLACK_NOTIFIER_"))
            .merge(cli.clone())
            .extract()
            .context("invalid slack-notifier configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that deserialize fine but cannot work at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.service.request_timeout_seconds == 0 {
            bail!("request_timeout_seconds must be greater than zero");
        }
        Ok(())
    }
}
