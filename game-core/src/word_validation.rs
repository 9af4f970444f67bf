use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use game_types::{RejectReason, WORD_LENGTH};
use tracing::{debug, warn};

/// Retryable failure of a word-existence lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    #[error("lookup service unreachable: {0}")]
    Unreachable(String),
    #[error("lookup service error: {0}")]
    Service(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    /// Definitive answer, never retried
    NotFound,
    TransientError(LookupFailure),
}

/// External word-existence check
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> LookupOutcome;
}

#[async_trait]
impl<L: WordLookup + ?Sized> WordLookup for Arc<L> {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        (**self).lookup(word).await
    }
}

/// Decides whether a candidate guess may be scored
#[async_trait]
pub trait GuessValidator: Send + Sync {
    async fn validate(&self, guess: &str) -> Result<(), RejectReason>;
}

#[async_trait]
impl<V: GuessValidator + ?Sized> GuessValidator for Arc<V> {
    async fn validate(&self, guess: &str) -> Result<(), RejectReason> {
        (**self).validate(guess).await
    }
}

#[async_trait]
impl<V: GuessValidator + ?Sized> GuessValidator for Box<V> {
    async fn validate(&self, guess: &str) -> Result<(), RejectReason> {
        (**self).validate(guess).await
    }
}

fn check_length(guess: &str) -> Result<(), RejectReason> {
    if guess.chars().count() != WORD_LENGTH {
        return Err(RejectReason::WrongLength);
    }
    Ok(())
}

/// Degraded mode: any five letter guess is accepted
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthOnlyValidator;

#[async_trait]
impl GuessValidator for LengthOnlyValidator {
    async fn validate(&self, guess: &str) -> Result<(), RejectReason> {
        check_length(guess)
    }
}

/// How many times a transient lookup failure is retried, and the pause
/// between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Run the lookup until it gives a definitive answer or the attempts are
    /// used up
    pub async fn run<L: WordLookup + ?Sized>(
        &self,
        lookup: &L,
        word: &str,
    ) -> Result<(), RejectReason> {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            match lookup.lookup(word).await {
                LookupOutcome::Found => {
                    debug!("Lookup accepted {} on attempt {}", word, attempt);
                    return Ok(());
                }
                LookupOutcome::NotFound => {
                    debug!("Lookup rejected {} as not a word", word);
                    return Err(RejectReason::NotAWord);
                }
                LookupOutcome::TransientError(failure) => {
                    warn!(
                        "Lookup attempt {}/{} for {} failed: {}",
                        attempt, attempts, word, failure
                    );
                    if attempt < attempts && !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                }
            }
        }

        Err(RejectReason::LookupUnavailable)
    }
}

/// Length check followed by an external word-existence lookup
pub struct DictionaryValidator<L> {
    lookup: L,
    retry: RetryPolicy,
}

impl<L: WordLookup> DictionaryValidator<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_retry(lookup, RetryPolicy::default())
    }

    pub fn with_retry(lookup: L, retry: RetryPolicy) -> Self {
        Self { lookup, retry }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }
}

#[async_trait]
impl<L: WordLookup> GuessValidator for DictionaryValidator<L> {
    async fn validate(&self, guess: &str) -> Result<(), RejectReason> {
        check_length(guess)?;
        self.retry.run(&self.lookup, guess).await
    }
}
