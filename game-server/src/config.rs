use std::env;
use std::str::FromStr;
use std::time::Duration;

use game_core::RetryPolicy;

use crate::websocket::rate_limiter::RateLimitConfig;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// How submitted guesses are checked before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Dictionary,
    LengthOnly,
}

impl FromStr for ValidationMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dictionary" => Ok(ValidationMode::Dictionary),
            "length-only" | "length_only" | "length" => Ok(ValidationMode::LengthOnly),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub words_file: Option<String>,
    pub validation_mode: ValidationMode,
    pub dictionary_url: String,
    pub lookup_attempts: u32,
    pub lookup_backoff_ms: u64,
    pub lookup_timeout_seconds: u64,
    pub rate_limit_burst: u32,
    pub rate_limit_refill_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys take their defaults
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: text("HOST", "127.0.0.1"),
            port: parse_value(&var, "PORT", 8080)?,
            words_file: var("WORDS_FILE").filter(|path| !path.trim().is_empty()),
            validation_mode: parse_value(&var, "VALIDATION_MODE", ValidationMode::Dictionary)?,
            dictionary_url: text("DICTIONARY_URL", DEFAULT_DICTIONARY_URL),
            lookup_attempts: parse_value(&var, "LOOKUP_ATTEMPTS", 3)?,
            lookup_backoff_ms: parse_value(&var, "LOOKUP_BACKOFF_MS", 0)?,
            lookup_timeout_seconds: parse_value(&var, "LOOKUP_TIMEOUT_SECONDS", 5)?,
            rate_limit_burst: parse_value(&var, "RATE_LIMIT_BURST", 30)?,
            rate_limit_refill_ms: parse_value(&var, "RATE_LIMIT_REFILL_MS", 100)?,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.lookup_attempts,
            Duration::from_millis(self.lookup_backoff_ms),
        )
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }

    pub fn rate_limit(&self) -> RateLimitConfig {
        RateLimitConfig {
            max_tokens: self.rate_limit_burst,
            refill_interval: Duration::from_millis(self.rate_limit_refill_ms),
        }
    }
}

fn parse_value<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.validation_mode, ValidationMode::Dictionary);
        assert_eq!(config.dictionary_url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.lookup_timeout(), Duration::from_secs(5));
        assert!(config.words_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("VALIDATION_MODE", "length-only"),
            ("LOOKUP_ATTEMPTS", "5"),
            ("LOOKUP_BACKOFF_MS", "250"),
            ("WORDS_FILE", "/tmp/words.txt"),
            ("RATE_LIMIT_BURST", "10"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.validation_mode, ValidationMode::LengthOnly);
        assert_eq!(
            config.retry_policy(),
            RetryPolicy::new(5, Duration::from_millis(250))
        );
        assert_eq!(config.words_file.as_deref(), Some("/tmp/words.txt"));
        assert_eq!(config.rate_limit().max_tokens, 10);
    }

    #[test]
    fn test_invalid_values() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config_from(&[("VALIDATION_MODE", "telepathy")]).is_err());
        assert!(config_from(&[("LOOKUP_ATTEMPTS", "-1")]).is_err());
    }
}
