//! IGDB API client
//!
//! [`IgdbClient`] ties the endpoint table, the pagination engine and a
//! transport together behind typed operations:
//!
//! | Operation          | Requests | On transport failure       |
//! |--------------------|----------|----------------------------|
//! | `get_all`          | 1..=N    | `Err(Error::PageFailed)`   |
//! | `get_many_by_id`   | 1        | logged, `Ok(vec![])`       |
//! | `get_by_id`        | 1        | logged, `Ok(None)`         |
//! | `query`            | 1        | logged, `Ok(vec![])`       |
//! | `search`           | 1        | logged, `Ok(vec![])`       |
//!
//! Every operation fails with [`Error::UnsupportedKind`](crate::Error::UnsupportedKind) when the model's
//! kind is missing from the endpoint table.

use crate::config::ClientConfig;
use crate::endpoint::{EndpointTable, ModelKind};
use crate::error::Result;
use crate::http::{ApiRequest, HttpClient, Transport};
use crate::models::Model;
use crate::pagination::{BulkFetcher, PaginationLimits};
use crate::types::FieldSelector;
use std::future::Future;
use tracing::{debug, error};

/// Default number of results requested by [`IgdbClient::search`]
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Typed client for the IGDB v3 API
#[derive(Debug)]
pub struct IgdbClient<T: Transport = HttpClient> {
    transport: T,
    endpoints: EndpointTable,
    limits: PaginationLimits,
}

impl IgdbClient<HttpClient> {
    /// Create a client for the public API with default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpClient::with_config(config.http_config())?;
        Ok(Self::with_transport(transport).with_limits(config.pagination))
    }
}

impl<T: Transport> IgdbClient<T> {
    /// Create a client over any transport using the IGDB v3 endpoint table
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoints: EndpointTable::igdb_v3(),
            limits: PaginationLimits::default(),
        }
    }

    /// Replace the endpoint table
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: EndpointTable) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the tier ceilings used by [`get_all`](Self::get_all)
    #[must_use]
    pub fn with_limits(mut self, limits: PaginationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The endpoint table
    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    /// The tier ceilings
    pub fn limits(&self) -> &PaginationLimits {
        &self.limits
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve the endpoint for a kind
    pub fn resolve(&self, kind: ModelKind) -> Result<&str> {
        self.endpoints.resolve(kind)
    }

    // ========================================================================
    // Bulk fetch
    // ========================================================================

    /// Fetch every record of `M` reachable within the tier ceilings
    ///
    /// All or nothing: if any page fails the whole call fails.
    pub async fn get_all<M: Model>(&self, fields: impl Into<FieldSelector>) -> Result<Vec<M>> {
        let endpoint = self.endpoints.resolve(M::KIND)?;
        let fields: FieldSelector = fields.into();
        BulkFetcher::new(&self.transport, self.limits)
            .fetch_all(endpoint, &fields)
            .await
    }

    /// [`get_all`](Self::get_all) that aborts with [`Error::Cancelled`](crate::Error::Cancelled)
    /// once `cancel` completes, returning no partial result
    pub async fn get_all_cancellable<M, F>(
        &self,
        fields: impl Into<FieldSelector>,
        cancel: F,
    ) -> Result<Vec<M>>
    where
        M: Model,
        F: Future<Output = ()>,
    {
        let endpoint = self.endpoints.resolve(M::KIND)?;
        let fields: FieldSelector = fields.into();
        BulkFetcher::new(&self.transport, self.limits)
            .fetch_all_until(endpoint, &fields, cancel)
            .await
    }

    // ========================================================================
    // Single-shot operations
    // ========================================================================

    /// Fetch records by id in a single request
    ///
    /// Records come back in server order. Transport or decode failures are
    /// logged and yield an empty list.
    pub async fn get_many_by_id<M: Model>(
        &self,
        ids: &[u64],
        fields: impl Into<FieldSelector>,
    ) -> Result<Vec<M>> {
        let endpoint = self.endpoints.resolve(M::KIND)?;
        if ids.is_empty() {
            debug!("get_many_by_id called with no ids for {endpoint}");
            return Ok(Vec::new());
        }

        let csv_ids = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let fields: FieldSelector = fields.into();
        let request = ApiRequest::get(format!("{endpoint}{csv_ids}")).query("fields", fields);

        Ok(self.execute_single(endpoint, &request).await)
    }

    /// Fetch a single record by id
    pub async fn get_by_id<M: Model>(
        &self,
        id: u64,
        fields: impl Into<FieldSelector>,
    ) -> Result<Option<M>> {
        let records = self.get_many_by_id::<M>(&[id], fields).await?;
        Ok(records.into_iter().next())
    }

    /// Run a request with arbitrary query parameters
    ///
    /// `fields` is sent first, followed by `params` verbatim and in order.
    pub async fn query<M, I, K, V>(
        &self,
        params: I,
        fields: impl Into<FieldSelector>,
    ) -> Result<Vec<M>>
    where
        M: Model,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let endpoint = self.endpoints.resolve(M::KIND)?;
        let fields: FieldSelector = fields.into();
        let request = params
            .into_iter()
            .fold(ApiRequest::get(endpoint).query("fields", fields), |req, (k, v)| {
                req.query(k, v)
            });

        Ok(self.execute_single(endpoint, &request).await)
    }

    /// Free-text search returning up to [`DEFAULT_SEARCH_LIMIT`] results
    pub async fn search<M: Model>(
        &self,
        text: &str,
        fields: impl Into<FieldSelector>,
    ) -> Result<Vec<M>> {
        self.search_with_limit(text, fields, DEFAULT_SEARCH_LIMIT)
            .await
    }

    /// Free-text search with an explicit result count
    ///
    /// No pagination happens; ask for a large enough `limit` up front.
    pub async fn search_with_limit<M: Model>(
        &self,
        text: &str,
        fields: impl Into<FieldSelector>,
        limit: u32,
    ) -> Result<Vec<M>> {
        let endpoint = self.endpoints.resolve(M::KIND)?;
        let fields: FieldSelector = fields.into();
        let request = ApiRequest::get(endpoint)
            .query("fields", fields)
            .query("limit", limit)
            .query("search", text);

        Ok(self.execute_single(endpoint, &request).await)
    }

    /// Execute a one-off request, degrading any failure to an empty list
    async fn execute_single<M: Model>(&self, endpoint: &str, request: &ApiRequest) -> Vec<M> {
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed response from endpoint: {endpoint}: {e}");
                return Vec::new();
            }
        };

        if !response.is_success() {
            error!(
                "Failed response from endpoint: {endpoint}: HTTP {}",
                response.status
            );
            return Vec::new();
        }

        match response.json::<Vec<M>>() {
            Ok(records) => {
                debug!("Received {} record(s) from {endpoint}", records.len());
                records
            }
            Err(e) => {
                error!("Undecodable response from endpoint: {endpoint}: {e}");
                Vec::new()
            }
        }
    }
}
