use std::time::Duration;

use rand::Rng;

use crate::{AirbnbError, Result};

/// Bounded retry schedule with uniform jitter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    max_retries: usize,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    /// Creates a policy sending at most `max_retries + 1` times and waiting
    /// `[min_delay_ms, max_delay_ms)` between sends.
    pub fn new(max_retries: usize, min_delay_ms: u64, max_delay_ms: u64) -> Result<Self> {
        if min_delay_ms >= max_delay_ms {
            return Err(AirbnbError::Config(format!(
                "retry delay range is empty: min {min_delay_ms} ms >= max {max_delay_ms} ms"
            )));
        }
        Ok(Self {
            max_retries,
            min_delay_ms,
            max_delay_ms,
        })
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Draws the next backoff delay uniformly from `[min, max)`.
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_delay_ms..self.max_delay_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 15,
            min_delay_ms: 500,
            max_delay_ms: 2_500,
        }
    }
}

/// Configures HTTP timeout, retry and logging behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-send timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retry cap and backoff range for non-success statuses.
    pub retry: RetryPolicy,
    /// Whether connection-level failures are retried like non-success
    /// statuses. When `false` the first transport error is returned.
    pub retry_transport_errors: bool,
    /// Logs attempted URLs, status codes and backoff waits.
    pub debug: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            retry: RetryPolicy::default(),
            retry_transport_errors: false,
            debug: false,
        }
    }
}
