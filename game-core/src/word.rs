use std::fmt;

use game_types::WORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must have {} letters, got {len}", WORD_LENGTH)]
    WrongLength { len: usize },
    #[error("Word contains non-alphabetic character {ch:?}")]
    NonAlphabetic { ch: char },
}

/// Exactly five ASCII uppercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    /// Parse a word case-insensitively. Surrounding whitespace is not trimmed.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::WrongLength { len });
        }

        let mut letters = [' '; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::NonAlphabetic { ch });
            }
            *slot = ch.to_ascii_uppercase();
        }

        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The hidden word of one round. Fixed from round start until the round is
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretWord(Word);

impl SecretWord {
    pub fn new(word: Word) -> Self {
        Self(word)
    }

    pub fn parse(text: &str) -> Result<Self, WordError> {
        Word::parse(text).map(Self)
    }

    pub fn word(&self) -> &Word {
        &self.0
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
