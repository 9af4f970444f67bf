use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_tokens: u32,
    pub refill_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_tokens: 30,                             // Max 30 keys in a burst
            refill_interval: Duration::from_millis(100), // Refill 1 token every 100ms
        }
    }
}

/// Token bucket guarding one connection's inbound messages
#[derive(Debug, Clone)]
pub struct RateLimiter {
    tokens: u32,
    max_tokens: u32,
    refill_interval: Duration,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::from_config(RateLimitConfig::default())
    }

    pub fn from_config(config: RateLimitConfig) -> Self {
        Self {
            tokens: config.max_tokens, // Start with full bucket
            max_tokens: config.max_tokens,
            refill_interval: config.refill_interval.max(Duration::from_millis(1)),
            last_refill: Instant::now(),
        }
    }

    pub fn check_rate_limit(&mut self) -> bool {
        self.refill_tokens();

        if self.tokens > 0 {
            self.tokens -= 1;
            true
        } else {
            false
        }
    }

    fn refill_tokens(&mut self) {
        let elapsed = self.last_refill.elapsed();
        let intervals = elapsed.as_millis() / self.refill_interval.as_millis();

        if intervals > 0 {
            let tokens_to_add = u32::try_from(intervals).unwrap_or(u32::MAX);
            self.tokens = self.tokens.saturating_add(tokens_to_add).min(self.max_tokens);
            self.last_refill += self.refill_interval * tokens_to_add.min(self.max_tokens);
            if self.tokens == self.max_tokens {
                self.last_refill = Instant::now();
            }
        }
    }

    pub fn get_remaining_tokens(&mut self) -> u32 {
        self.refill_tokens();
        self.tokens
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_then_block() {
        let mut limiter = RateLimiter::from_config(RateLimitConfig {
            max_tokens: 3,
            refill_interval: Duration::from_secs(60),
        });

        assert!(limiter.check_rate_limit());
        assert!(limiter.check_rate_limit());
        assert!(limiter.check_rate_limit());
        assert!(!limiter.check_rate_limit());
        assert_eq!(limiter.get_remaining_tokens(), 0);
    }

    #[test]
    fn test_refill() {
        let mut limiter = RateLimiter::from_config(RateLimitConfig {
            max_tokens: 2,
            refill_interval: Duration::from_millis(5),
        });

        assert!(limiter.check_rate_limit());
        assert!(limiter.check_rate_limit());
        assert!(!limiter.check_rate_limit());

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(limiter.get_remaining_tokens(), 2);
    }
}
