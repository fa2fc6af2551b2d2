//! rolewarden - Main Entry Point
//!
//! Connects to the platform's bot gateway and runs the event loop until
//! the connection drops or a shutdown signal arrives.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use rolewarden::config::Config;
use rolewarden::db;
use rolewarden::dispatcher::Dispatcher;
use rolewarden::gateway::WsGateway;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    // Initialize tracing
    let default_filter = if config.debug {
        "rolewarden=debug"
    } else {
        "rolewarden=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting rolewarden");

    // Bootstrap storage for account links and imported profiles
    let pool = db::create_pool(&config.database_path).await?;
    db::run_migrations(&pool).await?;

    // Connect to the bot gateway
    let (gateway, mut events) = WsGateway::connect(&config.gateway_url, &config.token).await?;
    let dispatcher = Dispatcher::new(gateway);

    info!("rolewarden should be running!");

    // Event loop until the gateway drops or we get a shutdown signal
    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Some(event) => dispatcher.handle(event).await,
                    None => {
                        info!("Gateway connection closed, shutting down");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal, cleaning up...");
                break;
            }
        }
    }

    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}
