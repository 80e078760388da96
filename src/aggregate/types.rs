//! Aggregation output types

use crate::market::MarketRecord;
use serde::{Deserialize, Serialize};

/// Display projection of a single market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketView {
    pub id: String,
    pub question: Option<String>,
    pub volume: f64,
    pub liquidity: f64,
    /// Distance of the YES price from 0.5, scaled to [0, 1]
    pub spread: f64,
    pub end_date: Option<String>,
    pub yes_price: f64,
    pub no_price: f64,
}

impl MarketView {
    /// Project a raw record
    pub fn from_record(record: &MarketRecord) -> Self {
        let yes_price = record.yes_price();

        Self {
            id: record.id.clone(),
            question: record.question.clone(),
            volume: record.volume,
            liquidity: record.liquidity,
            spread: (yes_price - 0.5).abs() * 2.0,
            end_date: record.end_date.clone(),
            yes_price,
            no_price: record.no_price(),
        }
    }
}

/// Market entry in the global ranking, tagged with its display category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketView {
    pub category: String,
    #[serde(flatten)]
    pub market: MarketView,
}

/// Summary of all markets sharing a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub name: String,
    /// Members in fetch order; kept in memory only
    #[serde(skip)]
    pub markets: Vec<MarketView>,
    #[serde(rename = "marketCount")]
    pub count: usize,
    pub total_volume: f64,
    pub total_liquidity: f64,
    pub avg_liquidity: f64,
    /// Highest-volume members, descending
    pub top_markets: Vec<MarketView>,
    pub top_market: Option<MarketView>,
}

/// Aggregator output
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Categories by descending total volume
    pub categories: Vec<CategoryAggregate>,
    /// Highest-volume markets across all categories
    pub top_global: Vec<GlobalMarketView>,
}
