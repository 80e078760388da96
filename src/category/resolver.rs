//! Explicit-or-inferred category resolution

use super::{infer_category, FALLBACK_CATEGORY};
use crate::market::MarketRecord;

/// Returns the record's own category when it is usable
///
/// Absent, empty and the literal `"null"` count as missing. Anything else
/// is taken verbatim.
pub fn explicit_category(record: &MarketRecord) -> Option<&str> {
    record
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "null")
}

/// Assigns each record a single category label
#[derive(Debug, Clone, Copy)]
pub struct CategoryResolver {
    infer: bool,
}

impl CategoryResolver {
    /// Create a resolver; `infer` enables keyword inference for records
    /// without an explicit category
    pub fn new(infer: bool) -> Self {
        Self { infer }
    }

    /// Whether keyword inference is enabled
    pub fn infers(&self) -> bool {
        self.infer
    }

    /// Resolve the category label for a record
    pub fn resolve<'a>(&self, record: &'a MarketRecord) -> &'a str {
        match explicit_category(record) {
            Some(category) => category,
            None if self.infer => infer_category(record.question.as_deref()),
            None => FALLBACK_CATEGORY,
        }
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::new(true)
    }
}
