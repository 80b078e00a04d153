// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # igdb-client
//!
//! A typed, rate-aware client for the IGDB v3 video game metadata API.
//!
//! ## Features
//!
//! - **Typed Models**: Game, Genre, Platform, Pulse, PulseSource, ReleaseDate
//!   and expanded variants, each bound to its endpoint at compile time
//! - **Bulk Fetch**: Walks listing endpoints within the account tier's page
//!   size and offset ceilings, all or nothing
//! - **Lookups**: By id, by id set, free-text search, arbitrary query params
//! - **Transport**: Retries with backoff, token bucket rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use igdb_client::{models::Genre, IgdbClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = IgdbClient::new(std::env::var("IGDB_API_KEY").unwrap())?;
//!
//!     // Single record
//!     let racing: Option<Genre> = client.get_by_id(10, "*").await?;
//!
//!     // Everything the tier allows (at most 200 on the free tier)
//!     let genres: Vec<Genre> = client.get_all("name,slug").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         IgdbClient                           │
//! │  get_all  get_many_by_id  get_by_id  query  search           │
//! └──────────────────────────────────────────────────────────────┘
//!          │                  │                     │
//! ┌────────┴───────┬──────────┴────────┬────────────┴───────────┐
//! │ EndpointTable  │   BulkFetcher     │   Transport            │
//! ├────────────────┼───────────────────┼────────────────────────┤
//! │ kind → path    │ limit / offset    │ HttpClient (reqwest)   │
//! │                │ X-Count           │ Retry, Rate Limit      │
//! └────────────────┴───────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Model kind to endpoint resolution
pub mod endpoint;

/// Typed domain models
pub mod models;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Bulk fetch pagination
pub mod pagination;

/// The typed API client
pub mod client;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::IgdbClient;
pub use config::ClientConfig;
pub use endpoint::{EndpointTable, ModelKind};
pub use error::{Error, Result};
pub use models::Model;
pub use pagination::PaginationLimits;
pub use types::FieldSelector;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
