//! CLI commands and argument parsing

use crate::endpoint::ModelKind;
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Typed command-line client for the IGDB v3 API
#[derive(Parser, Debug)]
#[command(name = "igdb-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (falls back to IGDB_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Field selector passed through to the API
    #[arg(short, long, global = true, default_value = "*")]
    pub fields: String,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every record of a kind the account tier allows
    All {
        /// Record kind
        kind: KindArg,
    },

    /// Fetch records by id
    Get {
        /// Record kind
        kind: KindArg,

        /// Ids (comma-separated)
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<u64>,
    },

    /// Free-text search
    Search {
        /// Record kind
        kind: KindArg,

        /// Search text
        text: String,

        /// Number of results to request
        #[arg(short, long, default_value = "50")]
        limit: u32,
    },

    /// Request with arbitrary query parameters
    Query {
        /// Record kind
        kind: KindArg,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Show the endpoint table
    Endpoints,
}

/// Record kind as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Game,
    GameExtended,
    Genre,
    Platform,
    Pulse,
    PulseExtended,
    PulseSource,
    ReleaseDate,
}

impl From<KindArg> for ModelKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Game => ModelKind::Game,
            KindArg::GameExtended => ModelKind::GameExtended,
            KindArg::Genre => ModelKind::Genre,
            KindArg::Platform => ModelKind::Platform,
            KindArg::Pulse => ModelKind::Pulse,
            KindArg::PulseExtended => ModelKind::PulseExtended,
            KindArg::PulseSource => ModelKind::PulseSource,
            KindArg::ReleaseDate => ModelKind::ReleaseDate,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON array
    Pretty,
}

/// Parse a `key=value` pair
fn parse_key_val(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("invalid parameter '{s}': expected key=value"))?;
    if key.is_empty() {
        return Err(anyhow!("invalid parameter '{s}': empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}
