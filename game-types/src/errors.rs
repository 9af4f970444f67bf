use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why a submitted guess was not scored. Every reason is recoverable: the
/// player edits the guess and submits again.
///
/// `Display` yields the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum RejectReason {
    #[error("Word must have 5 letters")]
    WrongLength,
    #[error("Your input is not an actual word")]
    NotAWord,
    #[error("There has been an error, please try again")]
    LookupUnavailable,
}
