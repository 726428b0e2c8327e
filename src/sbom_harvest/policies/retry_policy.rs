use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::time::Duration;

/// RetryPolicy for artifact downloads.
///
/// Attempts are strictly sequential with a constant delay between them
/// (no backoff, no jitter). There is no sleep after the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Creates a policy; `max_attempts` must be at least 1
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(HarvestError::Validation {
                message: "retry attempts must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `fetch` until it succeeds or attempts run out.
    ///
    /// `on_failure` is told about every failed attempt (1-based).
    ///
    /// # Errors
    /// Returns `HarvestError::FetchExhausted` naming `url` and the attempt
    /// count once every attempt has failed
    pub fn run<T, F, N>(&self, url: &str, mut fetch: F, mut on_failure: N) -> Result<T>
    where
        F: FnMut() -> Result<T>,
        N: FnMut(u32, &anyhow::Error),
    {
        for attempt in 1..=self.max_attempts {
            match fetch() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    on_failure(attempt, &e);
                    if attempt < self.max_attempts {
                        std::thread::sleep(self.delay);
                    }
                }
            }
        }

        Err(HarvestError::FetchExhausted {
            url: url.to_string(),
            attempts: self.max_attempts,
        }
        .into())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}
