//! Pagination module
//!
//! Offset/limit bulk fetch bounded by the account tier's ceilings.
//!
//! # Overview
//!
//! A bulk fetch walks a listing endpoint with a fixed page size, starting at
//! offset 0 and advancing by the page size after every page. It stops when
//! either:
//!
//! - the offset passes the tier's maximum offset (silent truncation), or
//! - the total count reported in the first page's `X-Count` header has been
//!   reached.
//!
//! Pages are requested strictly one after another. Any failing page aborts
//! the whole fetch and nothing accumulated so far is returned.

mod engine;
mod types;

pub use engine::BulkFetcher;
pub use types::{PageRequest, PageResponse, PaginationLimits, PaginationState};
