use std::sync::Arc;

use clap::{Parser, Subcommand};
use exit_beacon::{
    beacon::{BeaconSender, HttpBeaconSender},
    cmd::fire::{self, FireArgs},
    config::AppConfig,
    lifecycle::{self, TeardownDispatcher, TeardownEvent},
    notifier::ExitNotifier,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Directory holding app.yaml. Defaults to `configs`.
    #[arg(short, long)]
    config_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the agent until a teardown signal arrives.
    Run(RunArgs),
    /// Fires a single beacon immediately and exits.
    Fire(FireArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_agent(args).await?,
        Commands::Fire(args) => fire::execute(args).await?,
    }

    Ok(())
}

async fn run_agent(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(args.config_dir.as_deref())?;
    tracing::debug!(collector_url = %config.collector_url, "Configuration loaded.");

    let sender: Arc<dyn BeaconSender> = Arc::new(HttpBeaconSender::new(
        config.collector_url.clone(),
        &config.http,
    )?);

    // Process-wide setup, performed exactly once: the notifier subscribes
    // in the capture phase and stays subscribed for the process lifetime.
    let mut dispatcher = TeardownDispatcher::new();
    let notifier = Arc::new(ExitNotifier::new(Some(sender)));
    notifier.subscribe(&mut dispatcher);
    tracing::info!(collector_url = %config.collector_url, "Exit notifier registered, waiting for teardown signal.");

    let reason = lifecycle::signals::wait_for_teardown().await;
    tracing::info!(?reason, "Teardown signal received, dispatching.");
    dispatcher.dispatch(&TeardownEvent { reason });

    // The runtime owns any in-flight transmission: give it a bounded
    // window to flush, then exit whether or not delivery happened.
    tokio::time::sleep(config.shutdown_grace_ms).await;
    tracing::info!("Shutdown complete.");

    Ok(())
}
