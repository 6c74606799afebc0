use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use compose_deck::config::Config;
use compose_deck::docker::{DockerClient, FleetGateway};
use compose_deck::fleet::SnapshotProvider;
use compose_deck::logging;
use compose_deck::monitor::HealthMonitor;

#[derive(Parser, Debug)]
#[command(
    name = "compose-deck-monitor",
    version,
    about = "Watches compose containers and mails alerts on state changes"
)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init("compose-deck-monitor");

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let gateway: Arc<dyn FleetGateway> = Arc::new(
        DockerClient::connect(config.compose_command.clone())
            .context("Failed to connect to Docker")?,
    );

    if config.monitor.email.is_empty() {
        info!("No alert recipient configured, alerts go to the log");
    }

    let monitor = HealthMonitor::new(
        SnapshotProvider::new(gateway),
        config.monitor.transport(),
        config.monitor.settings(),
        config.projects.clone(),
    );

    monitor.run(shutdown_signal()).await;
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Interrupted"),
        _ = terminate => info!("Terminated"),
    }
}
