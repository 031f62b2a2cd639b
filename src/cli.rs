//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. The configuration-related flags are merged over the TOML file
//! and environment variables through the `figment::Provider` impl below.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Send a formatted message to a Slack channel through its incoming webhook.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log the message instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Log channel setup and Slack responses.
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Reference of the channel to send to.
    #[arg(long, value_name = "REFERENCE")]
    pub channel: String,

    /// Bold title line of the message.
    #[arg(long)]
    pub title: String,

    /// Message body (mrkdwn).
    #[arg(long)]
    pub message: String,

    /// Optional footer shown below a divider.
    #[arg(long)]
    pub footer: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        // Flags only override when set; absent flags leave file/env values alone.
        if self.dry_run {
            dict.insert("send_enabled".into(), Value::from(false));
        }

        if self.verbose {
            dict.insert("verbose".into(), Value::from(true));
        }

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
