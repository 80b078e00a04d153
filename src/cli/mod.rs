//! CLI module
//!
//! Command-line interface for querying the API.
//!
//! # Commands
//!
//! - `all` - Bulk fetch every reachable record of a kind
//! - `get` - Fetch records by id
//! - `search` - Free-text search
//! - `query` - Request with arbitrary query parameters
//! - `endpoints` - Show the kind → endpoint table

mod commands;
mod runner;

pub use commands::{Cli, Commands, KindArg, OutputFormat};
pub use runner::Runner;
