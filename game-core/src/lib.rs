pub mod game_events;
pub mod game_state;
pub mod input;
pub mod round_actor;
pub mod scoring;
pub mod word;
pub mod word_source;
pub mod word_validation;

// Re-export main components
pub use game_events::*;
pub use game_state::*;
pub use input::*;
pub use round_actor::*;
pub use scoring::*;
pub use word::*;
pub use word_source::*;
pub use word_validation::*;
