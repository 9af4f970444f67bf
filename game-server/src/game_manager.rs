use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::websocket::connection::{ConnectionId, ConnectionSink};
use game_core::{
    GuessValidator, RoundActor, RoundHandle, RoundMachine, RoundState, WordSource,
    WordSourceError,
};

#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub round_id: Uuid,
    pub started_at: Instant,
}

/// Starts rounds and tracks which connection is playing which round
pub struct GameManager {
    word_source: Box<dyn WordSource>,
    validator: Arc<dyn GuessValidator>,
    active_rounds: DashMap<ConnectionId, ActiveRound>,
}

impl GameManager {
    pub fn new(word_source: Box<dyn WordSource>, validator: Arc<dyn GuessValidator>) -> Self {
        Self {
            word_source,
            validator,
            active_rounds: DashMap::new(),
        }
    }

    /// Spawn a fresh round for a connection, replacing any round it had
    pub fn start_round(
        &self,
        connection_id: ConnectionId,
        sink: ConnectionSink,
    ) -> Result<(Uuid, RoundHandle), WordSourceError> {
        let secret = self.word_source.next_secret()?;
        let machine = RoundMachine::new(self.validator.clone());
        let handle = RoundActor::spawn(RoundState::new(secret), machine, sink);

        let round_id = Uuid::new_v4();
        self.active_rounds.insert(
            connection_id,
            ActiveRound {
                round_id,
                started_at: Instant::now(),
            },
        );

        info!("Started round {} for connection {}", round_id, connection_id);
        Ok((round_id, handle))
    }

    pub fn end_round(&self, connection_id: ConnectionId) -> Option<ActiveRound> {
        let removed = self.active_rounds.remove(&connection_id).map(|(_, round)| round);
        if let Some(round) = &removed {
            info!(
                "Round {} for connection {} ended after {:?}",
                round.round_id,
                connection_id,
                round.started_at.elapsed()
            );
        }
        removed
    }

    pub fn active_round(&self, connection_id: ConnectionId) -> Option<ActiveRound> {
        self.active_rounds
            .get(&connection_id)
            .map(|round| round.value().clone())
    }

    pub fn active_round_count(&self) -> usize {
        self.active_rounds.len()
    }
}
