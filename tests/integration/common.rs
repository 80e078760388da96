//! Shared test fixtures

use async_trait::async_trait;
use poly_snapshot::market::{MarketRecord, MarketSource, PageQuery, SourceError};
use std::sync::Mutex;

/// In-memory market source serving a fixed listing
pub struct ListingSource {
    listing: Vec<MarketRecord>,
    page_sizes: Option<Vec<usize>>,
    pub queries: Mutex<Vec<PageQuery>>,
}

impl ListingSource {
    /// Serve `listing` in pages of the requested size
    pub fn new(listing: Vec<MarketRecord>) -> Self {
        Self {
            listing,
            page_sizes: None,
            queries: Mutex::new(vec![]),
        }
    }

    /// Serve generated records in pages of exactly these sizes
    pub fn with_page_sizes(page_sizes: Vec<usize>) -> Self {
        Self {
            listing: vec![],
            page_sizes: Some(page_sizes),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn request_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl MarketSource for ListingSource {
    async fn fetch_page(&self, query: PageQuery) -> Result<Vec<MarketRecord>, SourceError> {
        let mut queries = self.queries.lock().unwrap();
        let call = queries.len();
        queries.push(query);

        if let Some(ref sizes) = self.page_sizes {
            let size = sizes.get(call).copied().unwrap_or(0);
            return Ok((0..size)
                .map(|i| record(&format!("m{}", query.offset + i), None, "Generated?", 1.0))
                .collect());
        }

        Ok(self
            .listing
            .iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }
}

/// Source whose every request fails
pub struct DownSource;

#[async_trait]
impl MarketSource for DownSource {
    async fn fetch_page(&self, query: PageQuery) -> Result<Vec<MarketRecord>, SourceError> {
        Err(SourceError::Unavailable {
            offset: query.offset,
            reason: "HTTP 502 Bad Gateway".to_string(),
        })
    }
}

pub fn record(id: &str, category: Option<&str>, question: &str, volume: f64) -> MarketRecord {
    MarketRecord {
        id: id.to_string(),
        question: Some(question.to_string()),
        category: category.map(str::to_string),
        volume,
        liquidity: volume / 4.0,
        ..Default::default()
    }
}
