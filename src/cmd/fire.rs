//! Fires a single exit beacon immediately, without waiting for a teardown
//! signal. Useful for checking collector wiring after a deployment.

use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use crate::{
    beacon::{BeaconError, BeaconSender, HttpBeaconSender},
    config::AppConfig,
    lifecycle::{TeardownDispatcher, TeardownEvent, TeardownReason},
    notifier::ExitNotifier,
};

/// Errors that can occur while firing a one-off beacon.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// The HTTP sender could not be constructed.
    #[error("Beacon error: {0}")]
    Beacon(#[from] BeaconError),
}

/// Arguments for the `fire` subcommand.
#[derive(Parser, Debug)]
pub struct FireArgs {
    /// Directory holding app.yaml. Defaults to `configs`.
    #[arg(short, long)]
    config_dir: Option<String>,
}

/// Wires the full notification pipeline, dispatches one explicitly
/// requested teardown event, and exits after the flush window.
pub async fn execute(args: FireArgs) -> Result<(), Error> {
    let config = AppConfig::new(args.config_dir.as_deref())?;

    let sender: Arc<dyn BeaconSender> = Arc::new(HttpBeaconSender::new(
        config.collector_url.clone(),
        &config.http,
    )?);
    let notifier = Arc::new(ExitNotifier::new(Some(sender)));
    let mut dispatcher = TeardownDispatcher::new();
    notifier.subscribe(&mut dispatcher);

    dispatcher.dispatch(&TeardownEvent {
        reason: TeardownReason::Requested,
    });
    tracing::info!(collector_url = %config.collector_url, "Beacon fired, waiting out the flush window.");

    tokio::time::sleep(config.shutdown_grace_ms).await;
    Ok(())
}
