//! WebSocket gateway client.
//!
//! Connects to the platform's bot gateway endpoint, decodes inbound
//! [`ServerEvent`]s onto a channel, and drains an outbound channel of
//! [`ClientEvent`]s into the socket. Both pump tasks end when the socket
//! closes; the dropped event channel is how the caller observes
//! disconnection.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tracing::{error, info, warn};

use super::events::{ClientEvent, ServerEvent};
use super::{Gateway, GatewayError};

/// Handle for sending events to a connected gateway.
///
/// Cheap to clone; all clones feed the same outbound pump.
#[derive(Debug, Clone)]
pub struct WsGateway {
    outbound: mpsc::UnboundedSender<ClientEvent>,
}

impl WsGateway {
    /// Connect to the bot gateway and start the socket pump tasks.
    ///
    /// Returns the outbound handle and the stream of decoded server
    /// events. The receiver yields `None` once the connection is gone.
    pub async fn connect(
        url: &str,
        token: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ServerEvent>), GatewayError> {
        let mut request = url.into_client_request()?;
        let auth = HeaderValue::from_str(&format!("Bot {token}"))
            .map_err(|_| GatewayError::InvalidToken)?;
        request.headers_mut().insert(AUTHORIZATION, auth);

        let (socket, _response) = connect_async(request).await?;
        info!(url = %url, "Connected to bot gateway");

        let (mut sink, mut stream) = socket.split();
        let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<ClientEvent>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<ServerEvent>();

        // Outbound pump: client events -> socket.
        tokio::spawn(async move {
            while let Some(event) = outbound_rx.recv().await {
                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("Failed to serialize client event: {}", e);
                        continue;
                    }
                };
                if sink.send(Message::Text(json.into())).await.is_err() {
                    break; // Connection closed
                }
            }
        });

        // Inbound pump: socket -> decoded server events.
        tokio::spawn(async move {
            while let Some(msg) = stream.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        match serde_json::from_str::<ServerEvent>(text.as_str()) {
                            Ok(event) => {
                                if event_tx.send(event).is_err() {
                                    break; // Receiver dropped, shutting down
                                }
                            }
                            Err(e) => {
                                warn!("Failed to decode server event: {}", e);
                            }
                        }
                    }
                    Ok(Message::Close(_)) => {
                        info!("Gateway closed the connection");
                        break;
                    }
                    Ok(_) => {} // Ping/pong handled by tungstenite
                    Err(e) => {
                        warn!("Gateway read error: {}", e);
                        break;
                    }
                }
            }
        });

        Ok((Self { outbound: outbound_tx }, event_rx))
    }
}

#[async_trait]
impl Gateway for WsGateway {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), GatewayError> {
        self.outbound
            .send(ClientEvent::MessageCreate {
                channel_id: channel_id.to_owned(),
                content: content.to_owned(),
            })
            .map_err(|_| GatewayError::ConnectionClosed)
    }
}
