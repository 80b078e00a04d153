//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::IgdbClient;
use crate::config::{ClientConfig, API_KEY_ENV};
use crate::endpoint::{EndpointTable, ModelKind};
use crate::error::{Error, Result};
use crate::models::{
    Game, GameExtended, Genre, Model, Platform, Pulse, PulseExtended, PulseSource, ReleaseDate,
};
use crate::types::{FieldSelector, JsonValue, OptionStringExt};
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        if let Commands::Endpoints = self.cli.command {
            self.print_endpoints();
            return Ok(());
        }

        let records = self.execute().await?;
        self.print_records(&records)
    }

    /// Run a fetching command and collect the records as JSON
    pub async fn execute(&self) -> Result<Vec<JsonValue>> {
        let client = IgdbClient::from_config(&self.load_config()?)?;
        let kind: ModelKind = match &self.cli.command {
            Commands::All { kind }
            | Commands::Get { kind, .. }
            | Commands::Search { kind, .. }
            | Commands::Query { kind, .. } => (*kind).into(),
            Commands::Endpoints => {
                return Err(Error::config("endpoints does not fetch records"))
            }
        };

        let start = Instant::now();
        let records = match kind {
            ModelKind::Game => self.fetch::<Game>(&client).await?,
            ModelKind::GameExtended => self.fetch::<GameExtended>(&client).await?,
            ModelKind::Genre => self.fetch::<Genre>(&client).await?,
            ModelKind::Platform => self.fetch::<Platform>(&client).await?,
            ModelKind::Pulse => self.fetch::<Pulse>(&client).await?,
            ModelKind::PulseExtended => self.fetch::<PulseExtended>(&client).await?,
            ModelKind::PulseSource => self.fetch::<PulseSource>(&client).await?,
            ModelKind::ReleaseDate => self.fetch::<ReleaseDate>(&client).await?,
        };
        info!(
            "{} {kind} record(s) in {:.2?}",
            records.len(),
            start.elapsed()
        );

        Ok(records)
    }

    /// Assemble configuration from the file, the flags and the environment
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => {
                let api_key = self
                    .cli
                    .api_key
                    .clone()
                    .none_if_empty()
                    .or_else(|| std::env::var(API_KEY_ENV).ok().none_if_empty())
                    .ok_or_else(|| {
                        Error::config(format!(
                            "No API key given (use --api-key, --config or set {API_KEY_ENV})"
                        ))
                    })?;
                ClientConfig::new(api_key)
            }
        };

        if let Some(api_key) = self.cli.api_key.clone().none_if_empty() {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = self.cli.base_url.clone().none_if_empty() {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the selected command for one model type
    async fn fetch<M: Model>(&self, client: &IgdbClient) -> Result<Vec<JsonValue>> {
        let fields = FieldSelector::new(self.cli.fields.as_str());

        let records: Vec<M> = match &self.cli.command {
            Commands::All { .. } => client.get_all(fields).await?,
            Commands::Get { ids, .. } => client.get_many_by_id(ids, fields).await?,
            Commands::Search { text, limit, .. } => {
                client.search_with_limit(text, fields, *limit).await?
            }
            Commands::Query { params, .. } => client.query(params.clone(), fields).await?,
            Commands::Endpoints => Vec::new(),
        };

        records
            .iter()
            .map(|record| serde_json::to_value(record).map_err(Error::from))
            .collect()
    }

    fn print_records(&self, records: &[JsonValue]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(records)?);
            }
        }
        Ok(())
    }

    fn print_endpoints(&self) {
        for (kind, path) in EndpointTable::igdb_v3().iter() {
            println!("{:<16} {path}", kind.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn runner(server: &MockServer, args: &[&str]) -> Runner {
        let uri = server.uri();
        let mut argv = vec!["igdb-client", "--api-key", "test-key", "--base-url", &uri];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[tokio::test]
    async fn test_execute_get() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/genres/10"))
            .and(query_param("fields", "*"))
            .and(header("user-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "name": "Racing", "slug": "racing"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let records = runner(&mock_server, &["get", "genre", "10"])
            .execute()
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Racing");
        assert_eq!(records[0]["slug"], "racing");
    }

    #[tokio::test]
    async fn test_execute_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/platforms/"))
            .and(query_param("search", "xbox"))
            .and(query_param("limit", "5"))
            .and(query_param("fields", "name"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 12, "name": "Xbox 360"}])),
            )
            .mount(&mock_server)
            .await;

        let records = runner(
            &mock_server,
            &["-f", "name", "search", "platform", "xbox", "--limit", "5"],
        )
        .execute()
        .await
        .unwrap();

        assert_eq!(records[0]["id"], 12);
    }

    #[tokio::test]
    async fn test_execute_all_failure_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Authentication failed"))
            .mount(&mock_server)
            .await;

        let result = runner(&mock_server, &["all", "game"]).execute().await;

        assert!(matches!(result, Err(Error::PageFailed { .. })));
    }

    #[test]
    fn test_load_config_flag_overrides() {
        let cli = Cli::try_parse_from([
            "igdb-client",
            "--api-key",
            "flag-key",
            "--base-url",
            "http://localhost:9000",
            "endpoints",
        ])
        .unwrap();
        let config = Runner::new(cli).load_config().unwrap();

        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: file-key").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["igdb-client", "--config", &path, "endpoints"]).unwrap();
        let config = Runner::new(cli).load_config().unwrap();

        assert_eq!(config.api_key, "file-key");
    }
}
