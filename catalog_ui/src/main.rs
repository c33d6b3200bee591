use anyhow::Context;
use catalog_core::{CatalogConfig, ContentSource, SystemClock};
use catalog_ui::{app, state::AppState};
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Serve the department events page
#[derive(Parser, Debug)]
#[command(name = "catalog_ui", version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configured one
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting catalog_ui");

    let source: Arc<dyn ContentSource> = Arc::from(config.source.build());
    let state = Arc::new(AppState::new(source, Arc::new(SystemClock)));

    // The page shows the loading state until this first fetch settles
    let loader = state.clone();
    tokio::spawn(async move {
        loader.reload().await;
    });

    let addr = match args.bind {
        Some(addr) => addr,
        None => config.server.socket_addr()?,
    };
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server started successfully");

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }
    Ok(())
}
