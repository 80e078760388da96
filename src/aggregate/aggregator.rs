//! Groups markets by category and ranks them by volume

use super::{Aggregation, CategoryAggregate, GlobalMarketView, MarketView};
use crate::category::{explicit_category, CategoryResolver, FALLBACK_CATEGORY};
use crate::market::MarketRecord;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default number of top markets kept per category
pub const DEFAULT_TOP_PER_CATEGORY: usize = 10;

/// Default length of the global ranking
pub const DEFAULT_TOP_GLOBAL: usize = 50;

/// Running totals for one category
struct CategoryAccumulator {
    name: String,
    markets: Vec<MarketView>,
    total_volume: f64,
    total_liquidity: f64,
}

impl CategoryAccumulator {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            markets: Vec::new(),
            total_volume: 0.0,
            total_liquidity: 0.0,
        }
    }

    fn push(&mut self, view: MarketView) {
        self.total_volume += view.volume;
        self.total_liquidity += view.liquidity;
        self.markets.push(view);
    }

    fn finish(self, top_n: usize) -> CategoryAggregate {
        let count = self.markets.len();

        let mut top_markets = self.markets.clone();
        sort_by_volume_desc(&mut top_markets, |m| m.volume);
        top_markets.truncate(top_n);

        CategoryAggregate {
            name: self.name,
            count,
            total_volume: self.total_volume,
            total_liquidity: self.total_liquidity,
            avg_liquidity: self.total_liquidity / count as f64,
            top_market: top_markets.first().cloned(),
            top_markets,
            markets: self.markets,
        }
    }
}

/// Descending stable sort; equal keys keep their current order
fn sort_by_volume_desc<T>(items: &mut [T], volume: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| {
        volume(b)
            .partial_cmp(&volume(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Turns a flat market list into per-category summaries and a global ranking
#[derive(Debug, Clone)]
pub struct Aggregator {
    resolver: CategoryResolver,
    top_per_category: usize,
    top_global: usize,
}

impl Aggregator {
    /// Create an aggregator with the default ranking sizes
    pub fn new(resolver: CategoryResolver) -> Self {
        Self::with_limits(resolver, DEFAULT_TOP_PER_CATEGORY, DEFAULT_TOP_GLOBAL)
    }

    /// Create an aggregator with custom ranking sizes
    pub fn with_limits(
        resolver: CategoryResolver,
        top_per_category: usize,
        top_global: usize,
    ) -> Self {
        Self {
            resolver,
            top_per_category,
            top_global,
        }
    }

    /// Maximum members listed per category
    pub fn top_per_category(&self) -> usize {
        self.top_per_category
    }

    /// Maximum length of the global ranking
    pub fn top_global(&self) -> usize {
        self.top_global
    }

    /// Aggregate all records
    pub fn aggregate(&self, records: &[MarketRecord]) -> Aggregation {
        Aggregation {
            categories: self.group_by_category(records),
            top_global: self.rank_globally(records),
        }
    }

    /// Per-category summaries, by descending total volume
    ///
    /// Categories start out in first-encounter order, so categories with
    /// equal totals stay in that order after the stable sort.
    pub fn group_by_category(&self, records: &[MarketRecord]) -> Vec<CategoryAggregate> {
        let mut index: HashMap<String, usize> = HashMap::new();

        let accumulators = records
            .iter()
            .fold(Vec::new(), |mut acc: Vec<CategoryAccumulator>, record| {
                let name = self.resolver.resolve(record);
                let slot = match index.get(name) {
                    Some(&slot) => slot,
                    None => {
                        index.insert(name.to_string(), acc.len());
                        acc.push(CategoryAccumulator::new(name));
                        acc.len() - 1
                    }
                };
                acc[slot].push(MarketView::from_record(record));
                acc
            });

        let mut categories: Vec<CategoryAggregate> = accumulators
            .into_iter()
            .map(|acc| acc.finish(self.top_per_category))
            .collect();
        sort_by_volume_desc(&mut categories, |c| c.total_volume);

        tracing::debug!(categories = categories.len(), "Grouped markets by category");

        categories
    }

    /// Global volume ranking
    ///
    /// Uses the explicit category or the fallback label; keyword inference
    /// is not applied here, so a market without an explicit category shows
    /// as "Outros" in this list even when it was grouped under an inferred
    /// category.
    pub fn rank_globally(&self, records: &[MarketRecord]) -> Vec<GlobalMarketView> {
        let mut ranked: Vec<GlobalMarketView> = records
            .iter()
            .map(|record| GlobalMarketView {
                category: explicit_category(record)
                    .unwrap_or(FALLBACK_CATEGORY)
                    .to_string(),
                market: MarketView::from_record(record),
            })
            .collect();

        sort_by_volume_desc(&mut ranked, |m| m.market.volume);
        ranked.truncate(self.top_global);
        ranked
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(CategoryResolver::default())
    }
}
