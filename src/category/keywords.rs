//! Keyword table for category inference

use super::FALLBACK_CATEGORY;

/// Category keyword table, evaluated top to bottom
///
/// Order matters: a question matching several categories gets the first
/// one listed here (Elections is tested before Politics, for instance).
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Crypto",
        &[
            "bitcoin",
            "ethereum",
            "btc",
            "eth",
            "solana",
            "xrp",
            "crypto",
            "blockchain",
            "defi",
            "nft",
            "stablecoin",
            "cardano",
            "polkadot",
            "doge",
            "shiba",
        ],
    ),
    (
        "Elections",
        &[
            "election",
            "vote",
            "presidential",
            "democratic",
            "republican",
            "biden",
            "trump",
            "harris",
            "governor",
            "senate",
            "congress",
            "electoral",
        ],
    ),
    (
        "Politics",
        &[
            "biden",
            "trump",
            "harris",
            "congress",
            "senate",
            "supreme court",
            "impeachment",
            "administration",
            "policy",
            "bill",
            "law",
        ],
    ),
    (
        "Sports",
        &[
            "super bowl",
            "nfl",
            "nba",
            "mlb",
            "nhl",
            "world cup",
            "champions league",
            "premier league",
            "fifa",
            "olympics",
            "tennis",
            "golf",
            "boxing",
            "ufc",
            "football",
            "basketball",
            "soccer",
        ],
    ),
    (
        "Tech",
        &[
            "ai",
            "artificial intelligence",
            "machine learning",
            "openai",
            "google",
            "apple",
            "microsoft",
            "tesla",
            "spacex",
            "iphone",
            "android",
            "ios",
            "startup",
            "ipo",
        ],
    ),
    (
        "US-current-affairs",
        &[
            "us",
            "america",
            "united states",
            "white house",
            "pentagon",
            "federal reserve",
            "fed",
            "inflation",
            "gdp",
            "economy",
        ],
    ),
    (
        "Coronavirus",
        &[
            "covid",
            "coronavirus",
            "pandemic",
            "vaccine",
            "fda",
            "cdc",
            "masks",
            "lockdown",
        ],
    ),
    (
        "Pop-Culture",
        &[
            "oscars", "emmys", "tony", "grammy", "hollywood", "movie", "film", "actor", "actress",
            "netflix", "disney", "marvel", "dc",
        ],
    ),
];

/// Infer a category from question text
///
/// Keywords match as plain substrings of the lower-cased question, so short
/// keywords like "ai" or "us" also hit inside longer words.
pub fn infer_category(question: Option<&str>) -> &'static str {
    let Some(question) = question.filter(|q| !q.is_empty()) else {
        return FALLBACK_CATEGORY;
    };
    let question = question.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| question.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}
