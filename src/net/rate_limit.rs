// src/net/rate_limit.rs
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

const DEFAULT_MIN_DELAY_SECS: f64 = 2.0;
const DEFAULT_MAX_DELAY_SECS: f64 = 4.0;

/// Spaces requests out with a randomized delay so traffic does not land
/// on a fixed cadence. The first call never waits.
#[derive(Debug)]
pub struct RateLimiter {
    min_delay: Duration,
    max_delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        // An inverted range would panic inside gen_range.
        let max_delay = max_delay.max(min_delay);
        Self {
            min_delay,
            max_delay,
            last_request: None,
        }
    }

    /// Sleep until a randomly drawn delay in `[min, max]` has elapsed since
    /// the previous call, then mark this call as the new reference point.
    pub fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let delay = self.draw_delay();
            let elapsed = last.elapsed();
            if elapsed < delay {
                let pause = delay - elapsed;
                debug!(pause_ms = pause.as_millis() as u64, "rate limit pause");
                thread::sleep(pause);
            }
        }
        self.last_request = Some(Instant::now());
    }

    fn draw_delay(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }
        rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(
            Duration::from_secs_f64(DEFAULT_MIN_DELAY_SECS),
            Duration::from_secs_f64(DEFAULT_MAX_DELAY_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_does_not_wait() {
        let mut limiter = RateLimiter::new(Duration::from_secs(5), Duration::from_secs(10));
        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn second_call_waits_at_least_min_delay() {
        let mut limiter =
            RateLimiter::new(Duration::from_millis(50), Duration::from_millis(80));
        limiter.wait();
        let start = Instant::now();
        limiter.wait();
        // Slightly under min_delay: `start` is taken a hair after the
        // limiter's own reference point.
        assert!(start.elapsed() >= Duration::from_millis(45));
    }

    #[test]
    fn inverted_range_is_clamped() {
        let mut limiter =
            RateLimiter::new(Duration::from_millis(20), Duration::from_millis(1));
        limiter.wait();
        // Would panic in gen_range without the clamp.
        limiter.wait();
    }
}
