pub mod errors;
pub mod game;
pub mod messages;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;

/// Letters in every secret and every scored guess
pub const WORD_LENGTH: usize = 5;

/// Scored guesses allowed before a round is lost
pub const MAX_GUESSES: usize = 6;
