//! Category resolution
//!
//! Uses the API-provided category when there is one, otherwise infers a
//! label from the question text via a fixed keyword table.

mod keywords;
mod resolver;

pub use keywords::{infer_category, CATEGORY_KEYWORDS};
pub use resolver::{explicit_category, CategoryResolver};

/// Label for markets that match no category
pub const FALLBACK_CATEGORY: &str = "Outros";
