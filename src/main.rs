use anyhow::Context;
use clap::Parser;
use grocery_list_rust::config::Config;
use grocery_list_rust::delivery::{CarrierTable, SmtpRelay};
use grocery_list_rust::list::AppState;
use grocery_list_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::parse();
    info!(?config, "loaded configuration");

    // Initialize application state
    let relay = SmtpRelay::new(config.relay());
    let state = Arc::new(AppState::new(CarrierTable::default(), Arc::new(relay)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "server running");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
