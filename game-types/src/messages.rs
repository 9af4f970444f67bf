use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::FrameOutcome;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClientMessage {
    /// Raw keyboard event key, e.g. "a", "Enter", "Backspace"
    Key { key: String },
    NewRound,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServerMessage {
    RoundStarted {
        round_id: Uuid,
        word_length: u32,
        max_guesses: u32,
    },
    Frame { outcome: FrameOutcome },
    Error { message: String },
}
