use game_types::{Feedback, LetterFeedback, WORD_LENGTH};

use crate::{SecretWord, Word};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a guess against the secret, position by position.
    ///
    /// Each position is judged on its own: a letter that is not in place is
    /// `Present` whenever the secret contains it anywhere. Repeated guess
    /// letters are not budgeted against the secret's letter counts, so
    /// guessing two `A`s against a secret with one `A` can mark both
    /// `Present`. Canonical Wordle would mark the surplus `A` as `Absent`.
    pub fn score(secret: &SecretWord, guess: &Word) -> Feedback {
        let secret_letters = secret.word().letters();
        let mut feedback = [LetterFeedback::Absent; WORD_LENGTH];

        for (i, &ch) in guess.letters().iter().enumerate() {
            feedback[i] = if ch == secret_letters[i] {
                LetterFeedback::Correct
            } else if secret.word().contains(ch) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        feedback
    }
}
