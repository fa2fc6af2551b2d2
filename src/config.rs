//! Bot Configuration
//!
//! Loaded from command-line arguments with environment variable fallbacks
//! (`ROLEWARDEN_*`). A `.env` file in the working directory is honored.

use clap::Parser;
use std::path::PathBuf;

/// Role-gated automation bot for self-hosted chat platforms.
#[derive(Parser, Debug, Clone)]
#[command(name = "rolewarden")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Bot token for the platform gateway
    #[arg(short = 't', long, env = "ROLEWARDEN_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Bot gateway WebSocket URL
    #[arg(
        long,
        env = "ROLEWARDEN_GATEWAY_URL",
        default_value = "ws://localhost:8080/ws/bot"
    )]
    pub gateway_url: String,

    /// SQLite database path
    #[arg(long, env = "ROLEWARDEN_DATABASE_PATH", default_value = "./data.db")]
    pub database_path: PathBuf,

    /// Enable debug logging
    #[arg(short, long, env = "ROLEWARDEN_DEBUG")]
    pub debug: bool,
}
