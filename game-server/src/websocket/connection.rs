use game_core::FrameSink;
use game_types::{FrameOutcome, ServerMessage};
use std::fmt;
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Forwards a round's outcomes to a connection's outgoing queue
#[derive(Debug, Clone)]
pub struct ConnectionSink {
    connection_id: ConnectionId,
    sender: mpsc::UnboundedSender<ServerMessage>,
}

impl ConnectionSink {
    pub fn new(connection_id: ConnectionId, sender: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Self {
            connection_id,
            sender,
        }
    }

    pub fn send_message(&self, message: ServerMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .map_err(|_| "Connection closed".to_string())
    }
}

impl FrameSink for ConnectionSink {
    fn handle_frame(&mut self, outcome: FrameOutcome) {
        // NoOp frames carry nothing to render
        if outcome == FrameOutcome::NoOp {
            return;
        }
        if let Err(e) = self.send_message(ServerMessage::Frame { outcome }) {
            tracing::debug!("Dropping frame for {}: {}", self.connection_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_skips_noop() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut sink = ConnectionSink::new(ConnectionId::new(), sender);

        sink.handle_frame(FrameOutcome::NoOp);
        sink.handle_frame(FrameOutcome::LetterRemoved { row: 0, col: 0 });

        match receiver.try_recv().unwrap() {
            ServerMessage::Frame { outcome } => {
                assert_eq!(outcome, FrameOutcome::LetterRemoved { row: 0, col: 0 })
            }
            other => panic!("Expected Frame, got {:?}", other),
        }
        assert!(receiver.try_recv().is_err());
    }
}
