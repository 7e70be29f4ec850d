//! Tumbler Server - Main Entry Point
//!
//! Serves the interactions webhook.

use anyhow::{Context, Result};
use tracing::info;

use tumbler_server::{api, commands::CommandRouter, config, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    // Initialize tracing
    telemetry::init(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        has_bot_token = config.has_bot_token(),
        "Starting Tumbler Server"
    );

    // Build the command registry once; it is read-only from here on
    let commands = CommandRouter::standard()?;
    for descriptor in commands.descriptors() {
        info!(
            command = %descriptor.name,
            description = descriptor.description,
            "Registered command"
        );
    }

    // Build application state
    let state = api::AppState::new(config.clone(), commands)
        .context("DISCORD_PUBLIC_KEY is not a valid Ed25519 public key")?;

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
