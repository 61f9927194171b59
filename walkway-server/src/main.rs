use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use walkway_core::loading::load_walkway_network;
use walkway_server::config::ServerConfig;
use walkway_server::routes::{AppState, router};

/// Campus walkway routing service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "walkway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load(&args.config)?;

    info!("Loading walkway network");
    let network = load_walkway_network(&config.data)?;
    info!(
        nodes = network.nodes().len(),
        edges = network.edges().len(),
        "Walkway network ready"
    );

    let state = AppState {
        network: Arc::new(network),
        default_max_angle: config.default_max_angle,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("Listening on {}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
    }
}
