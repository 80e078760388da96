//! Snapshot assembly with consistency checks

use super::Snapshot;
use crate::aggregate::Aggregation;
use crate::market::MarketRecord;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Snapshot assembly errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Aggregation does not describe the fetched records
    #[error("Snapshot invariant violated: {0}")]
    InvariantViolation(String),
}

/// Assembles a [`Snapshot`] from aggregation output
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Package the aggregation; fails only when it is inconsistent with
    /// the fetched records
    pub fn build(
        generated_at: DateTime<Utc>,
        records: &[MarketRecord],
        aggregation: Aggregation,
    ) -> Result<Snapshot, SnapshotError> {
        Self::check(records, &aggregation)?;

        Ok(Snapshot {
            generated_at,
            total_markets: records.len(),
            categories: aggregation.categories,
            top_markets_globally: aggregation.top_global,
        })
    }

    fn check(records: &[MarketRecord], aggregation: &Aggregation) -> Result<(), SnapshotError> {
        let violation = |msg: String| Err(SnapshotError::InvariantViolation(msg));

        for category in &aggregation.categories {
            if category.count == 0 || category.count != category.markets.len() {
                return violation(format!(
                    "category {} has count {} but {} members",
                    category.name,
                    category.count,
                    category.markets.len()
                ));
            }
            if category.top_market.as_ref() != category.top_markets.first() {
                return violation(format!(
                    "category {} top market is not the first ranked member",
                    category.name
                ));
            }
        }

        let grouped: usize = aggregation.categories.iter().map(|c| c.count).sum();
        if grouped != records.len() {
            return violation(format!(
                "{} markets grouped but {} fetched",
                grouped,
                records.len()
            ));
        }

        if aggregation.top_global.len() > records.len() {
            return violation(format!(
                "global ranking has {} entries for {} markets",
                aggregation.top_global.len(),
                records.len()
            ));
        }

        Ok(())
    }
}
