//! Client-side request throttling
//!
//! IGDB v3 allows four requests per second per key. Exceeding it earns a
//! 429, so the transport waits on a governor token bucket before every
//! attempt, retries included.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

type DirectLimiter = Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Request quota for one API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests that may go out back to back before throttling starts
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::igdb_v3()
    }
}

impl RateLimiterConfig {
    /// Create a quota
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// The IGDB v3 per-key quota (4 rps)
    pub fn igdb_v3() -> Self {
        Self::new(4, 4)
    }

    /// Governor quota; zero values are clamped to one
    fn quota(&self) -> Quota {
        let per_second = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(per_second).allow_burst(burst)
    }
}

/// Token bucket shared by clones of one transport
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
}

impl RateLimiter {
    /// Create a limiter enforcing `config`
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            limiter: Arc::new(Governor::direct(config.quota())),
        }
    }

    /// Wait until the next request may be sent
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_default_is_igdb_quota() {
        let config = RateLimiterConfig::default();
        assert_eq!(config, RateLimiterConfig::new(4, 4));

        let quota = config.quota();
        assert_eq!(quota.burst_size().get(), 4);
        assert_eq!(quota.replenish_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_quota_clamped_to_one() {
        let quota = RateLimiterConfig::new(0, 0).quota();
        assert_eq!(quota.burst_size().get(), 1);
        assert_eq!(quota.replenish_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_yaml() {
        let config: RateLimiterConfig =
            serde_yaml::from_str("requests_per_second: 8\nburst_size: 2\n").unwrap();
        assert_eq!(config, RateLimiterConfig::new(8, 2));
    }

    #[tokio::test]
    async fn test_burst_passes_then_throttles() {
        let limiter = RateLimiter::new(&RateLimiterConfig::igdb_v3());

        let start = Instant::now();
        for _ in 0..4 {
            limiter.wait().await;
        }
        assert!(start.elapsed() < Duration::from_millis(200));

        // The fifth request waits for a token to replenish
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_clones_share_one_bucket() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(1, 1));
        let clone = limiter.clone();

        let start = Instant::now();
        limiter.wait().await;
        clone.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(900));
    }
}
