//! Snapshot pipeline
//!
//! Fetch, categorize, aggregate and package, in that order. A run either
//! yields a complete [`Snapshot`] or fails as a whole.

mod types;

pub use types::PipelineError;

use crate::aggregate::Aggregator;
use crate::category::CategoryResolver;
use crate::config::Config;
use crate::market::{FetchConfig, MarketSource, PaginatedFetcher};
use crate::snapshot::{Snapshot, SnapshotBuilder};
use crate::telemetry::{set_gauge, GaugeMetric};
use chrono::{DateTime, Utc};

/// One-shot snapshot pipeline over a market source
pub struct Pipeline<S> {
    fetcher: PaginatedFetcher<S>,
    aggregator: Aggregator,
}

impl<S: MarketSource> Pipeline<S> {
    /// Create a pipeline from explicit parts
    pub fn new(source: S, fetch: FetchConfig, aggregator: Aggregator) -> Self {
        Self {
            fetcher: PaginatedFetcher::new(source, fetch),
            aggregator,
        }
    }

    /// Create a pipeline using the `[source]` and `[pipeline]` settings
    pub fn from_config(source: S, config: &Config) -> Self {
        let aggregator = Aggregator::with_limits(
            CategoryResolver::new(config.pipeline.infer_categories),
            config.pipeline.top_per_category,
            config.pipeline.top_global,
        );
        Self::new(source, config.source.fetch_config(), aggregator)
    }

    /// Market source in use
    pub fn source(&self) -> &S {
        self.fetcher.source()
    }

    /// Run the pipeline, stamping the snapshot with the current time
    pub async fn run(&self) -> Result<Snapshot, PipelineError> {
        self.run_at(Utc::now()).await
    }

    /// Run the pipeline with an explicit generation timestamp
    pub async fn run_at(&self, generated_at: DateTime<Utc>) -> Result<Snapshot, PipelineError> {
        let records = self.fetcher.fetch_all_active_markets().await?;
        let aggregation = self.aggregator.aggregate(&records);
        let snapshot = SnapshotBuilder::build(generated_at, &records, aggregation)?;

        set_gauge(GaugeMetric::TotalMarkets, snapshot.total_markets as f64);
        set_gauge(GaugeMetric::Categories, snapshot.categories.len() as f64);

        tracing::info!(
            markets = snapshot.total_markets,
            categories = snapshot.categories.len(),
            "Snapshot built"
        );

        Ok(snapshot)
    }
}
