// src/net/retry.rs
use std::thread;
use std::time::Duration;

use tracing::{error, warn};

use crate::errors::ScrapeError;

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;
const MAX_BACKOFF_SECS: f64 = 300.0;

/// Exponential backoff for transient failures. Wrap the operation in a
/// closure and hand it to `call`; non-transient errors pass straight
/// through without a retry.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Run `op` up to `max_retries + 1` times, sleeping
    /// `backoff_factor ^ attempt` seconds between tries. Returns the first
    /// success or the last transient error observed.
    pub fn call<T, F>(&self, mut op: F) -> Result<T, ScrapeError>
    where
        F: FnMut() -> Result<T, ScrapeError>,
    {
        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() => {
                    if attempt < self.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            attempt = attempt + 1,
                            delay_secs = delay.as_secs_f64(),
                            error = %err,
                            "transient failure, backing off"
                        );
                        thread::sleep(delay);
                    } else {
                        error!(
                            attempts = self.max_retries + 1,
                            error = %err,
                            "all attempts failed"
                        );
                    }
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.unwrap_or_else(|| ScrapeError::Network("retry loop exhausted".into())))
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        // max/min rather than clamp: from_secs_f64 panics on negative or
        // non-finite input, and max(0.0) also absorbs a NaN factor.
        let secs = self
            .backoff_factor
            .powi(attempt as i32)
            .max(0.0)
            .min(MAX_BACKOFF_SECS);
        Duration::from_secs_f64(secs)
    }
}
