//! Client configuration
//!
//! Configuration can be loaded from a YAML file or assembled from the
//! environment. A minimal file only needs the API key:
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! ```
//!
//! Everything else has defaults matching the public IGDB v3 free tier:
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! base_url: "https://api-v3.igdb.com"
//! pagination:
//!   max_limit: 50
//!   max_offset: 150
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//!   initial_backoff_ms: 100
//!   max_backoff_ms: 60000
//!   rate_limit:
//!     requests_per_second: 4
//!     burst_size: 4
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::PaginationLimits;
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public IGDB v3 API root
pub const DEFAULT_BASE_URL: &str = "https://api-v3.igdb.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "IGDB_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "IGDB_BASE_URL";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// IGDB user key
    pub api_key: String,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Tier ceilings for bulk fetches
    #[serde(default)]
    pub pagination: PaginationLimits,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    /// Config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            pagination: PaginationLimits::default(),
            http: HttpSettings::default(),
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Build from `IGDB_API_KEY` and optional `IGDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .none_if_empty()
            .ok_or_else(|| Error::missing_field(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = std::env::var(BASE_URL_ENV).ok().none_if_empty() {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Override the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }

        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        self.pagination.validate()?;

        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }

        Ok(())
    }

    /// Transport configuration derived from these settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .api_key(&self.api_key)
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            );

        builder = match &self.http.rate_limit {
            Some(rate_limit) => builder.rate_limit(rate_limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(user_agent) = &self.http.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder.build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("pagination", &self.pagination)
            .field("http", &self.http)
            .finish()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for transient failures
    pub max_retries: u32,
    /// Backoff strategy between retries
    pub backoff: BackoffType,
    /// First backoff delay in milliseconds
    pub initial_backoff_ms: u64,
    /// Backoff cap in milliseconds
    pub max_backoff_ms: u64,
    /// Token bucket quota; `null` disables client-side limiting
    pub rate_limit: Option<RateLimiterConfig>,
    /// Custom User-Agent
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            max_backoff_ms: 60_000,
            rate_limit: Some(RateLimiterConfig::igdb_v3()),
            user_agent: None,
        }
    }
}
