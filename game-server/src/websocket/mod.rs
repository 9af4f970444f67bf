use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use warp::ws::{Message, WebSocket};

use crate::game_manager::GameManager;
use game_core::RoundHandle;
use game_types::{ClientMessage, MAX_GUESSES, ServerMessage, WORD_LENGTH};

pub mod connection;
pub mod rate_limiter;

use connection::{ConnectionId, ConnectionSink};
use rate_limiter::{RateLimitConfig, RateLimiter};

pub async fn handle_connection(
    websocket: WebSocket,
    game_manager: Arc<GameManager>,
    rate_limit: RateLimitConfig,
) {
    let connection_id = ConnectionId::new();
    info!("New WebSocket connection: {}", connection_id);

    let (mut ws_sender, mut ws_receiver) = websocket.split();
    let (message_sender, mut message_receiver) = mpsc::unbounded_channel();
    let sink = ConnectionSink::new(connection_id, message_sender);

    let mut round = match start_round(&game_manager, connection_id, &sink) {
        Some(round) => round,
        None => {
            // Flush the error before closing
            while let Ok(message) = message_receiver.try_recv() {
                if let Ok(json) = serde_json::to_string(&message) {
                    let _ = ws_sender.send(Message::text(json)).await;
                }
            }
            let _ = ws_sender.close().await;
            return;
        }
    };

    // Handle incoming messages
    let incoming_handler = {
        let game_manager = game_manager.clone();
        let sink = sink.clone();
        let mut rate_limiter = RateLimiter::from_config(rate_limit);

        async move {
            while let Some(result) = ws_receiver.next().await {
                let msg = match result {
                    Ok(msg) => msg,
                    Err(e) => {
                        warn!("WebSocket error for {}: {}", connection_id, e);
                        break;
                    }
                };

                if msg.is_close() {
                    break;
                }

                if !rate_limiter.check_rate_limit() {
                    warn!("Rate limit exceeded for connection {}, dropping message", connection_id);
                    continue;
                }

                let client_message = match parse_message(&msg) {
                    Ok(Some(message)) => message,
                    Ok(None) => continue,
                    Err(e) => {
                        warn!("Bad message from {}: {}", connection_id, e);
                        let _ = sink.send_message(ServerMessage::Error { message: e });
                        continue;
                    }
                };

                match client_message {
                    ClientMessage::Key { key } => {
                        if round.send_key(key).await.is_err() {
                            error!("Round for {} stopped unexpectedly", connection_id);
                            break;
                        }
                    }
                    ClientMessage::NewRound => {
                        let _ = round.shutdown().await;
                        match start_round(&game_manager, connection_id, &sink) {
                            Some(next) => round = next,
                            None => break,
                        }
                    }
                }
            }

            round
        }
    };

    // Handle outgoing messages
    let outgoing_handler = async move {
        while let Some(message) = message_receiver.recv().await {
            let json = match serde_json::to_string(&message) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize message: {:?}", e);
                    continue;
                }
            };

            if let Err(e) = ws_sender.send(Message::text(json)).await {
                warn!("Failed to send message to {}: {:?}", connection_id, e);
                break;
            }
        }
    };

    // Run both handlers concurrently. If the writer finishes first the
    // incoming handler is dropped along with the last round handle, which
    // stops the round actor.
    tokio::select! {
        round = incoming_handler => {
            let _ = round.shutdown().await;
        },
        _ = outgoing_handler => {},
    }

    // Cleanup connection
    info!("Connection {} disconnected", connection_id);
    game_manager.end_round(connection_id);
}

/// Start a round and announce it to the client
fn start_round(
    game_manager: &GameManager,
    connection_id: ConnectionId,
    sink: &ConnectionSink,
) -> Option<RoundHandle> {
    match game_manager.start_round(connection_id, sink.clone()) {
        Ok((round_id, handle)) => {
            let _ = sink.send_message(ServerMessage::RoundStarted {
                round_id,
                word_length: WORD_LENGTH as u32,
                max_guesses: MAX_GUESSES as u32,
            });
            Some(handle)
        }
        Err(e) => {
            error!("Failed to start round for {}: {}", connection_id, e);
            let _ = sink.send_message(ServerMessage::Error {
                message: e.to_string(),
            });
            None
        }
    }
}

fn parse_message(msg: &Message) -> Result<Option<ClientMessage>, String> {
    // Only handle text messages
    if !msg.is_text() {
        debug!("Ignoring non-text message");
        return Ok(None);
    }

    let text = msg.to_str().map_err(|_| "Invalid text message".to_string())?;

    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| format!("Invalid JSON message: {}", e))
}
