use std::collections::BTreeSet;
use std::path::Path;

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use crate::{LookupOutcome, SecretWord, Word, WordLookup};

/// Secrets shipped with the game
pub const DEFAULT_WORDS: &[&str] = &[
    "blade", "knife", "risen", "spoon", "table", "weird", "input", "index", "prize", "mouse",
    "drink", "train", "space", "glide", "glory", "crest", "fight", "zebra", "spark", "slide",
];

#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("No five letter words available")]
    Empty,
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the secret for a new round
pub trait WordSource: Send + Sync {
    fn next_secret(&self) -> Result<SecretWord, WordSourceError>;
}

pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build from newline separated text. Blank lines and `#` comments are
    /// skipped; entries that are not five letters are dropped.
    pub fn from_word_list(word_list: &str) -> Self {
        let words: BTreeSet<Word> = word_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| Word::parse(line).ok())
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WordSourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::from_word_list(&contents);
        if list.is_empty() {
            return Err(WordSourceError::Empty);
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        Word::parse(word.trim())
            .map(|word| self.words.contains(&word))
            .unwrap_or(false)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::from_word_list(&DEFAULT_WORDS.join("\n"))
    }
}

impl WordSource for WordList {
    fn next_secret(&self) -> Result<SecretWord, WordSourceError> {
        self.words
            .choose(&mut rand::rng())
            .copied()
            .map(SecretWord::new)
            .ok_or(WordSourceError::Empty)
    }
}

/// Offline dictionary: a word exists iff it is on the list
#[async_trait]
impl WordLookup for WordList {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        if self.contains(word) {
            LookupOutcome::Found
        } else {
            LookupOutcome::NotFound
        }
    }
}

/// Always hands out the same secret
#[derive(Debug, Clone, Copy)]
pub struct FixedWord(pub SecretWord);

impl WordSource for FixedWord {
    fn next_secret(&self) -> Result<SecretWord, WordSourceError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let list = WordList::default();
        assert_eq!(list.len(), DEFAULT_WORDS.len());
        assert!(list.contains("table"));
        assert!(list.contains("ZEBRA"));
        assert!(!list.contains("apple"));
    }

    #[test]
    fn test_comments_and_whitespace() {
        let list = WordList::from_word_list(
            "# This is a comment\nvalid\n   \n\t# Another comment\n  tests  \nsix666\nbig\nvalid",
        );
        assert_eq!(list.len(), 2);
        assert!(list.contains("valid"));
        assert!(list.contains("tests"));
        assert!(!list.contains("big"));
    }

    #[test]
    fn test_random_secret_comes_from_list() {
        let list = WordList::from_word_list("house\nhuman\nhorse");
        for _ in 0..20 {
            let secret = list.next_secret().unwrap();
            assert!(list.contains(&secret.to_string()));
        }
    }

    #[test]
    fn test_empty_list() {
        let list = WordList::from_word_list("# nothing\n\nab");
        assert!(list.is_empty());
        assert!(matches!(list.next_secret(), Err(WordSourceError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let result = WordList::from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(WordSourceError::Io { .. })));
    }

    #[test]
    fn test_fixed_word() {
        let secret = SecretWord::parse("table").unwrap();
        assert_eq!(FixedWord(secret).next_secret().unwrap(), secret);
    }

    #[tokio::test]
    async fn test_list_as_lookup() {
        let list = WordList::default();
        assert_eq!(list.lookup("SPARK").await, LookupOutcome::Found);
        assert_eq!(list.lookup("SPARX").await, LookupOutcome::NotFound);
    }
}
