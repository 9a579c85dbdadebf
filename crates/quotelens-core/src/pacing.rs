use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Enforces a minimum interval between consecutive upstream requests.
///
/// Third-party quote and chart endpoints are fetched one symbol at a time;
/// the pacer keeps that traffic under the upstream rate limits. The first
/// acquisition passes immediately, every later one waits out the remainder
/// of the configured floor. `disabled()` turns pacing off for tests.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl RequestPacer {
    /// Default inter-request floor applied to upstream providers.
    pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

    pub fn with_min_interval(min_interval: Duration) -> Self {
        if min_interval.is_zero() {
            return Self::disabled();
        }

        let burst = NonZeroU32::new(1).expect("burst of one is non-zero");
        let quota = Quota::with_period(min_interval)
            .expect("pacing interval is greater than zero")
            .allow_burst(burst);

        Self {
            limiter: Some(Arc::new(RateLimiter::direct(quota))),
        }
    }

    pub fn disabled() -> Self {
        Self { limiter: None }
    }

    /// Waits until the next upstream request is allowed to go out.
    pub async fn pace(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::with_min_interval(Self::DEFAULT_MIN_INTERVAL)
    }
}
