//! Pagination types
//!
//! Defines the per-call state and request/response shapes of a bulk fetch.

use crate::error::{Error, Result};
use crate::http::ApiRequest;
use crate::types::FieldSelector;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Tier ceilings for a bulk fetch
///
/// The defaults reproduce the IGDB v3 free tier: pages of 50 and a maximum
/// offset of 150, i.e. at most four pages and 200 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLimits {
    /// Page size sent as `limit`
    pub max_limit: u32,
    /// Highest offset a request may carry
    pub max_offset: u32,
}

impl PaginationLimits {
    /// Free tier page size
    pub const FREE_TIER_MAX_LIMIT: u32 = 50;
    /// Free tier offset ceiling
    pub const FREE_TIER_MAX_OFFSET: u32 = 150;

    /// Create validated limits
    pub fn new(max_limit: u32, max_offset: u32) -> Result<Self> {
        let limits = Self {
            max_limit,
            max_offset,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Reject limits that could never make progress or whose last offset
    /// step would not fit in a `u32`
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(Error::invalid_value(
                "pagination.max_limit",
                "page size must be at least 1",
            ));
        }
        if self.max_offset.checked_add(self.max_limit).is_none() {
            return Err(Error::invalid_value(
                "pagination.max_offset",
                format!("max_offset + max_limit must not exceed {}", u32::MAX),
            ));
        }
        Ok(())
    }

    /// Upper bound on the number of pages a bulk fetch issues
    pub fn max_pages(&self) -> u32 {
        self.max_offset / self.max_limit.max(1) + 1
    }
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self {
            max_limit: Self::FREE_TIER_MAX_LIMIT,
            max_offset: Self::FREE_TIER_MAX_OFFSET,
        }
    }
}

/// Parameters of one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub endpoint: &'a str,
    pub fields: &'a FieldSelector,
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest<'_> {
    /// Build the wire request (`fields`, `limit`, `offset` in that order)
    pub fn to_api_request(&self) -> ApiRequest {
        ApiRequest::get(self.endpoint)
            .query("fields", self.fields)
            .query("limit", self.limit)
            .query("offset", self.offset)
    }
}

/// One decoded page
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T> {
    /// Records in server order
    pub records: Vec<T>,
    /// Raw `X-Count` value, if the server sent one
    pub total_count: Option<String>,
}

/// Tracks offset and total count across the pages of one bulk fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset of the next request
    pub offset: u32,
    /// Total record count from the first page; 0 means unknown, a negative
    /// count stops the fetch after the first page
    pub total_count: i64,
    /// Pages fetched so far
    pub pages: u32,
    /// Records fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for the next page
    pub fn next_request<'a>(
        &self,
        endpoint: &'a str,
        fields: &'a FieldSelector,
        limits: &PaginationLimits,
    ) -> PageRequest<'a> {
        PageRequest {
            endpoint,
            fields,
            limit: limits.max_limit,
            offset: self.offset,
        }
    }

    /// Record a successful page and decide whether another one is needed
    ///
    /// The count header is only read for the page at offset 0. An unparsable
    /// count is logged and leaves the total unknown.
    pub fn advance(
        &mut self,
        endpoint: &str,
        records: usize,
        count_header: Option<&str>,
        limits: &PaginationLimits,
    ) -> bool {
        self.pages += 1;
        self.total_fetched += records as u64;

        if self.offset == 0 {
            if let Some(raw) = count_header {
                match raw.trim().parse::<i64>() {
                    Ok(count) => self.total_count = count,
                    Err(_) => error!(
                        "Failed to parse X-Count header '{raw}' from response for endpoint: {endpoint}"
                    ),
                }
            }
        }

        self.offset = match self.offset.checked_add(limits.max_limit) {
            Some(offset) => offset,
            None => {
                debug!(endpoint, offset = self.offset, "Offset space exhausted");
                return false;
            }
        };

        let more_results_exist =
            self.total_count == 0 || self.total_count > i64::from(self.offset);
        let proceed = self.offset <= limits.max_offset && more_results_exist;

        debug!(
            endpoint,
            page = self.pages,
            records,
            next_offset = self.offset,
            total_count = self.total_count,
            proceed,
            "Processed page"
        );

        proceed
    }
}
