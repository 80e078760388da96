//! Snapshot document
//!
//! Packages the aggregation into the document handed to the page renderer

mod builder;
mod template;
mod writer;

pub use builder::{SnapshotBuilder, SnapshotError};
pub use template::{
    format_generated_at, render_file, render_template, DATA_PLACEHOLDER, GENERATED_AT_PLACEHOLDER,
};
pub use writer::{read_snapshot, write_snapshot};

use crate::aggregate::{CategoryAggregate, GlobalMarketView};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Aggregated view of all active markets at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the pipeline ran
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub generated_at: DateTime<Utc>,
    /// Number of fetched markets
    pub total_markets: usize,
    /// Categories by descending total volume
    pub categories: Vec<CategoryAggregate>,
    /// Highest-volume markets overall
    pub top_markets_globally: Vec<GlobalMarketView>,
}

/// `2026-10-18T09:30:00.000Z`
fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
