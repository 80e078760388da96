//! Market listing module
//!
//! Pulls the catalog of active markets from the Gamma API, page by page

mod fetcher;
mod gamma;
mod types;

pub use fetcher::{FetchConfig, PaginatedFetcher};
pub use gamma::{GammaClient, GammaConfig, GAMMA_API_URL};
pub use types::{MarketRecord, SourceError};

use async_trait::async_trait;

/// One page request against a market source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Requested page size
    pub limit: usize,
    /// Number of records to skip
    pub offset: usize,
}

/// Trait for paginated market listings
///
/// Implementations only return active, non-closed markets.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch one page; an empty page means the listing is exhausted
    async fn fetch_page(&self, query: PageQuery) -> Result<Vec<MarketRecord>, SourceError>;
}
