//! Bulk fetch loop

use super::types::{PageResponse, PaginationLimits, PaginationState};
use crate::error::{Error, Result};
use crate::http::{Transport, COUNT_HEADER};
use crate::types::FieldSelector;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, error, info};

/// Walks a listing endpoint page by page
pub struct BulkFetcher<'a, T: Transport + ?Sized> {
    transport: &'a T,
    limits: PaginationLimits,
}

impl<'a, T: Transport + ?Sized> BulkFetcher<'a, T> {
    /// Create a fetcher over a transport
    pub fn new(transport: &'a T, limits: PaginationLimits) -> Self {
        Self { transport, limits }
    }

    /// The limits this fetcher honours
    pub fn limits(&self) -> &PaginationLimits {
        &self.limits
    }

    /// Fetch every reachable record of an endpoint
    ///
    /// Returns either the complete result set or an error; records from
    /// pages preceding a failure are discarded.
    pub async fn fetch_all<M: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: &FieldSelector,
    ) -> Result<Vec<M>> {
        self.limits.validate()?;

        let mut state = PaginationState::new();
        let mut results = Vec::new();

        loop {
            let offset = state.offset;
            let page = match self.fetch_page::<M>(endpoint, fields, &state).await {
                Ok(page) => page,
                Err(e) => {
                    error!(
                        "Bulk fetch of {endpoint} aborted at offset {offset} after {} page(s): {e}",
                        state.pages
                    );
                    return Err(Error::page_failed(endpoint, offset, e));
                }
            };

            let count = page.records.len();
            results.extend(page.records);

            if !state.advance(endpoint, count, page.total_count.as_deref(), &self.limits) {
                break;
            }
        }

        info!(
            "Fetched {} record(s) from {endpoint} in {} page(s)",
            results.len(),
            state.pages
        );
        Ok(results)
    }

    /// Like [`fetch_all`](Self::fetch_all), aborting with
    /// [`Error::Cancelled`] as soon as `cancel` completes
    pub async fn fetch_all_until<M, F>(
        &self,
        endpoint: &str,
        fields: &FieldSelector,
        cancel: F,
    ) -> Result<Vec<M>>
    where
        M: DeserializeOwned,
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                debug!("Bulk fetch of {endpoint} cancelled");
                Err(Error::Cancelled)
            }
            result = self.fetch_all(endpoint, fields) => result,
        }
    }

    /// Request and decode one page
    async fn fetch_page<M: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: &FieldSelector,
        state: &PaginationState,
    ) -> Result<PageResponse<M>> {
        let request = state
            .next_request(endpoint, fields, &self.limits)
            .to_api_request();

        debug!(endpoint, offset = state.offset, "Requesting page");
        let response = self.transport.execute(&request).await?.error_for_status()?;

        Ok(PageResponse {
            records: response.json()?,
            total_count: response.header(COUNT_HEADER).map(str::to_string),
        })
    }
}
