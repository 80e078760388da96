//! Category aggregation and volume rankings

mod aggregator;
mod types;

pub use aggregator::{Aggregator, DEFAULT_TOP_GLOBAL, DEFAULT_TOP_PER_CATEGORY};
pub use types::{Aggregation, CategoryAggregate, GlobalMarketView, MarketView};
