use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{RejectReason, WORD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LetterFeedback {
    Correct, // Same letter, same position
    Present, // Letter occurs somewhere else in the secret
    Absent,  // Letter does not occur in the secret
}

/// Per-position feedback for one scored guess
pub type Feedback = [LetterFeedback; WORD_LENGTH];

/// True when every position of the feedback is `Correct`
pub fn is_winning(feedback: &Feedback) -> bool {
    feedback.iter().all(|f| *f == LetterFeedback::Correct)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// What the presentation layer should render after one command.
///
/// Rows and columns are zero based grid coordinates. `row` is the index of
/// the attempt being edited or scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FrameOutcome {
    LetterAdded { row: usize, col: usize, letter: char },
    LetterRemoved { row: usize, col: usize },
    GuessRejected { reason: RejectReason },
    GuessScored { row: usize, feedback: Feedback },
    RoundWon { row: usize, feedback: Feedback },
    RoundLost { row: usize, feedback: Feedback, secret: String },
    NoOp,
}

impl FrameOutcome {
    /// Feedback for outcomes that scored a row
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            FrameOutcome::GuessScored { feedback, .. }
            | FrameOutcome::RoundWon { feedback, .. }
            | FrameOutcome::RoundLost { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            FrameOutcome::RoundWon { .. } | FrameOutcome::RoundLost { .. }
        )
    }
}
