//! Slack notifier - command-line entry point
//!
//! Loads the channel configuration and sends a single generic message to one
//! channel, or logs it when sending is disabled.

use anyhow::{Context, Result};
use clap::Parser;
use slack_notifier::{
    cli::Cli,
    config::Config,
    formatting::{divider_block, footer_block, generic_message_blocks},
    NotificationService, TracingLogSink,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Manually initialize logging for this specific error
        tracing_subscriber::fmt().init();
        error!("Failed to load configuration: {:#}", err);
        std::process::exit(1);
    });

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        channels = config.service.channels.len(),
        send_enabled = config.service.send_enabled,
        verbose = config.service.verbose,
        "Slack notifier starting"
    );

    let service = NotificationService::new(&config.service, Arc::new(TracingLogSink))?;

    let mut blocks = generic_message_blocks(&cli.title, &cli.message);
    if let Some(footer) = &cli.footer {
        blocks.push(divider_block());
        blocks.push(footer_block(footer));
    }

    service
        .dispatch(&cli.channel, &blocks)
        .with_context(|| format!("failed to notify channel '{}'", cli.channel))?;

    Ok(())
}
