//! Platform gateway interface.
//!
//! The bot is the client side of the platform's bot gateway: a WebSocket
//! carrying JSON events in both directions, authenticated with an
//! `Authorization: Bot <token>` header on upgrade. [`Gateway`] abstracts
//! the outbound half so command handling can be tested against a
//! recording mock instead of a live socket.

use async_trait::async_trait;
use thiserror::Error;

pub mod events;
pub mod ws;

pub use events::{ClientEvent, ServerEvent};
pub use ws::WsGateway;

/// Gateway error types.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// WebSocket connect or protocol failure.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Token contains bytes not allowed in an Authorization header.
    #[error("bot token is not a valid Authorization header value")]
    InvalidToken,

    /// The connection is closed; outbound events can no longer be delivered.
    #[error("gateway connection closed")]
    ConnectionClosed,
}

/// Outbound half of the platform gateway.
///
/// The only effect the bot produces is sending a message payload back to a
/// channel; everything else is inbound observation.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send a message to a channel.
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), GatewayError>;
}
