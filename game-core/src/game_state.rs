use game_types::{Feedback, FrameOutcome, MAX_GUESSES, RoundStatus, WORD_LENGTH, is_winning};
use tracing::{debug, info};

use crate::{Command, GuessValidator, ScoringEngine, SecretWord, Word};

/// The attempt currently being typed, at most five uppercase letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialGuess {
    letters: Vec<char>,
}

impl PartialGuess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter. Returns false when the guess is full or the letter
    /// is not ASCII alphabetic.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(letter.to_ascii_uppercase());
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub feedback: Feedback,
}

/// Everything one round knows. Once the status leaves `InProgress` the
/// history and partial guess no longer change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: SecretWord,
    partial: PartialGuess,
    history: Vec<ScoredGuess>,
    status: RoundStatus,
}

impl RoundState {
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            partial: PartialGuess::new(),
            history: Vec::with_capacity(MAX_GUESSES),
            status: RoundStatus::InProgress,
        }
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub fn partial(&self) -> &PartialGuess {
        &self.partial
    }

    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Row the next letter or submission lands on
    pub fn current_row(&self) -> usize {
        self.history.len()
    }

    pub fn has_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|guess| is_winning(&guess.feedback))
    }
}

/// Drives one round: `apply` takes the state by value and hands back the
/// next state with the outcome to render.
pub struct RoundMachine<V> {
    validator: V,
}

impl<V: GuessValidator> RoundMachine<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub async fn apply(&self, mut state: RoundState, command: Command) -> (RoundState, FrameOutcome) {
        if state.status.is_finished() {
            debug!("Ignoring {:?}, round already {:?}", command, state.status);
            return (state, FrameOutcome::NoOp);
        }

        let outcome = match command {
            Command::Rejected => FrameOutcome::NoOp,
            Command::Letter(letter) => {
                if state.partial.push(letter) {
                    FrameOutcome::LetterAdded {
                        row: state.current_row(),
                        col: state.partial.len() - 1,
                        letter: letter.to_ascii_uppercase(),
                    }
                } else {
                    FrameOutcome::NoOp
                }
            }
            Command::Delete => match state.partial.pop() {
                Some(_) => FrameOutcome::LetterRemoved {
                    row: state.current_row(),
                    col: state.partial.len(),
                },
                None => FrameOutcome::NoOp,
            },
            Command::Submit => self.submit(&mut state).await,
        };

        debug!("{:?} -> {:?}", command, outcome);
        (state, outcome)
    }

    /// Rejections of any reason leave the partial guess in place so the
    /// player can edit and resubmit.
    async fn submit(&self, state: &mut RoundState) -> FrameOutcome {
        let candidate = state.partial.as_string();

        if let Err(reason) = self.validator.validate(&candidate).await {
            debug!("Rejected guess {:?}: {:?}", candidate, reason);
            return FrameOutcome::GuessRejected { reason };
        }

        let word = match Word::parse(&candidate) {
            Ok(word) => word,
            Err(_) => {
                return FrameOutcome::GuessRejected {
                    reason: game_types::RejectReason::WrongLength,
                };
            }
        };

        let feedback = ScoringEngine::score(&state.secret, &word);
        state.history.push(ScoredGuess { word, feedback });
        state.partial.clear();
        let row = state.history.len() - 1;

        if is_winning(&feedback) {
            state.status = RoundStatus::Won;
            info!("Round won in {} guesses", state.history.len());
            FrameOutcome::RoundWon { row, feedback }
        } else if state.history.len() == MAX_GUESSES {
            state.status = RoundStatus::Lost;
            info!("Round lost, secret was {}", state.secret);
            FrameOutcome::RoundLost {
                row,
                feedback,
                secret: state.secret.to_string(),
            }
        } else {
            FrameOutcome::GuessScored { row, feedback }
        }
    }
}
