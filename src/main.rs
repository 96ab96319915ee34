//! Pokedex HTTP server
//!
//! Loads the data file named by `--data` / `POKEDEX_DATA` and serves the
//! `/list/*` and `/get/*` routes on `--addr` / `POKEDEX_ADDR`.

use clap::Parser;
use pokedex::config::ServerConfig;
use pokedex::http::create_router;
use pokedex::logging::init_tracing;
use pokedex::{Pokedex, QueryService};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    init_tracing("pokedex=info,tower_http=info,warn");

    tracing::info!("Configuration:");
    tracing::info!("  POKEDEX_DATA: {}", config.data.data_path.display());
    tracing::info!("  POKEDEX_ADDR: {}", config.addr);

    // Nothing can be served without the data file.
    let pokedex = match Pokedex::load(&config.data.data_path) {
        Ok(pokedex) => pokedex,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match serve(config, pokedex).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("server error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig, pokedex: Pokedex) -> anyhow::Result<()> {
    let app = create_router(Arc::new(QueryService::new(pokedex)));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("starting server on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
