//! HTTP transport module
//!
//! Provides the transport seam used by the client and its reqwest-backed
//! implementation with retry, rate limiting, and backoff.
//!
//! # Features
//!
//! - **Transport Trait**: `execute(request) -> response` seam for the client
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Static Auth**: `user-key` header attached to every request

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ApiRequest, ApiResponse, Transport};

/// Header carrying the IGDB API key
pub const USER_KEY_HEADER: &str = "user-key";

/// Response header carrying the total number of matching records
pub const COUNT_HEADER: &str = "X-Count";
