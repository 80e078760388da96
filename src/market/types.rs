//! Market record types and source errors

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A market as returned by the Gamma `/markets` listing
///
/// Records decode only from JSON objects; arrays, scalars and null are
/// rejected. Numeric fields are coerced while decoding: anything absent,
/// null, non-numeric or non-finite becomes `0.0`, so a record never fails
/// to decode because of its numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct MarketRecord {
    /// Opaque market identifier
    pub id: String,
    /// Market question
    pub question: Option<String>,
    /// Category label as provided by the API (may be empty or "null")
    pub category: Option<String>,
    /// Total traded volume
    pub volume: f64,
    /// Current liquidity
    pub liquidity: f64,
    /// Outcome prices, index 0 = YES, index 1 = NO
    pub outcome_prices: Vec<f64>,
    /// End date, passed through untouched
    pub end_date: Option<String>,
}

/// Wire fields of one listing object
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFields {
    #[serde(default, deserialize_with = "lenient_id")]
    id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    question: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    volume: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    liquidity: f64,
    #[serde(default, deserialize_with = "lenient_prices")]
    outcome_prices: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    end_date: Option<String>,
}

impl TryFrom<Map<String, Value>> for MarketRecord {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: RecordFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            id: fields.id,
            question: fields.question,
            category: fields.category,
            volume: fields.volume,
            liquidity: fields.liquidity,
            outcome_prices: fields.outcome_prices,
            end_date: fields.end_date,
        })
    }
}

impl MarketRecord {
    /// YES price, 0 when absent
    pub fn yes_price(&self) -> f64 {
        self.outcome_prices.first().copied().unwrap_or(0.0)
    }

    /// NO price, 0 when absent
    pub fn no_price(&self) -> f64 {
        self.outcome_prices.get(1).copied().unwrap_or(0.0)
    }
}

/// Errors raised while pulling pages from a market source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Page request failed (transport error or non-success status)
    #[error("Market source unavailable at offset {offset}: {reason}")]
    Unavailable { offset: usize, reason: String },
    /// Page body did not match any accepted shape
    #[error("Malformed response at offset {offset}: {reason}")]
    MalformedResponse { offset: usize, reason: String },
    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Coerce a JSON value into a finite float, 0 otherwise
pub(crate) fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_f64).unwrap_or(0.0))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Accepts `["0.7","0.3"]`, `[0.7, 0.3]` or the Gamma wire form
/// `"[\"0.7\", \"0.3\"]"` (a JSON array encoded as a string)
fn lenient_prices<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().map(coerce_f64).collect(),
        Some(Value::String(encoded)) => serde_json::from_str::<Vec<Value>>(&encoded)
            .map(|items| items.iter().map(coerce_f64).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    })
}
