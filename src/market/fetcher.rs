//! Paginated fetch of the full active market listing

use super::{MarketRecord, MarketSource, PageQuery, SourceError};
use crate::telemetry::{increment_counter, record_latency, CounterMetric, LatencyMetric};
use std::time::Instant;

/// Pagination settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Records requested per page
    pub page_size: usize,
    /// Offset ceiling; no page is requested once the offset reaches it
    pub max_records: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 200,
            max_records: 1000,
        }
    }
}

/// Walks a [`MarketSource`] from offset 0 until it runs dry
pub struct PaginatedFetcher<S> {
    source: S,
    config: FetchConfig,
}

impl<S: MarketSource> PaginatedFetcher<S> {
    /// Create a new fetcher over the given source
    pub fn new(source: S, config: FetchConfig) -> Self {
        Self { source, config }
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every active market
    ///
    /// Stops on the first empty page or once the offset reaches
    /// `max_records`. The offset advances by the number of records actually
    /// returned, so short pages are handled. The first failing page aborts
    /// the whole fetch.
    pub async fn fetch_all_active_markets(&self) -> Result<Vec<MarketRecord>, SourceError> {
        let mut records = Vec::new();
        let mut offset = 0usize;
        let mut pages = 0usize;

        while offset < self.config.max_records {
            let query = PageQuery {
                limit: self.config.page_size,
                offset,
            };

            let started = Instant::now();
            let page = self.source.fetch_page(query).await?;
            record_latency(LatencyMetric::PageFetch, started.elapsed());
            increment_counter(CounterMetric::PagesFetched);
            pages += 1;

            tracing::debug!(offset, returned = page.len(), "Received market page");

            if page.is_empty() {
                break;
            }

            offset += page.len();
            records.extend(page);
        }

        if offset >= self.config.max_records {
            tracing::debug!(ceiling = self.config.max_records, "Reached pagination ceiling");
        }

        tracing::info!(markets = records.len(), pages, "Fetched active markets");

        Ok(records)
    }
}
