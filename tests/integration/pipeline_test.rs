//! End-to-end pipeline tests against in-memory sources

use crate::common::{record, DownSource, ListingSource};
use chrono::{TimeZone, Utc};
use poly_snapshot::aggregate::{Aggregator, CategoryAggregate, MarketView};
use poly_snapshot::category::CategoryResolver;
use poly_snapshot::config::Config;
use poly_snapshot::market::{FetchConfig, MarketRecord, SourceError};
use poly_snapshot::pipeline::{Pipeline, PipelineError};
use poly_snapshot::snapshot::Snapshot;
use std::collections::HashMap;

fn mixed_listing() -> Vec<MarketRecord> {
    let shapes: [(Option<&str>, &str); 6] = [
        (None, "Will Bitcoin hit $100k?"),
        (Some("Sports"), "Super Bowl winner?"),
        (Some(""), "Trump Senate election polls"),
        (Some("null"), "Will it snow in Oslo?"),
        (Some("Crypto"), "Who wins the Oscars?"),
        (None, "NBA Finals MVP?"),
    ];

    (0..43)
        .map(|i| {
            let (category, question) = shapes[i % shapes.len()];
            let volume = ((i * 37) % 11) as f64 * 100.0 + 0.1;
            record(&format!("m{}", i), category, question, volume)
        })
        .collect()
}

async fn snapshot_of(listing: Vec<MarketRecord>) -> Snapshot {
    let pipeline = Pipeline::new(
        ListingSource::new(listing),
        FetchConfig::default(),
        Aggregator::default(),
    );
    pipeline.run().await.unwrap()
}

fn category<'a>(snapshot: &'a Snapshot, name: &str) -> &'a CategoryAggregate {
    snapshot
        .categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("missing category {}", name))
}

#[tokio::test]
async fn test_every_market_grouped_exactly_once() {
    let listing = mixed_listing();
    let snapshot = snapshot_of(listing.clone()).await;

    let mut grouped: Vec<&str> = snapshot
        .categories
        .iter()
        .flat_map(|c| c.markets.iter().map(|m| m.id.as_str()))
        .collect();
    grouped.sort();

    let mut fetched: Vec<&str> = listing.iter().map(|r| r.id.as_str()).collect();
    fetched.sort();

    assert_eq!(grouped, fetched);
    assert_eq!(snapshot.total_markets, listing.len());
}

#[tokio::test]
async fn test_category_sums_match_members() {
    let snapshot = snapshot_of(mixed_listing()).await;

    for category in &snapshot.categories {
        let volume = category.markets.iter().fold(0.0, |acc, m| acc + m.volume);
        let liquidity = category.markets.iter().fold(0.0, |acc, m| acc + m.liquidity);
        assert_eq!(category.total_volume, volume, "{}", category.name);
        assert_eq!(category.total_liquidity, liquidity, "{}", category.name);
        assert_eq!(category.count, category.markets.len());
        assert_eq!(category.avg_liquidity, liquidity / category.count as f64);
    }
}

#[tokio::test]
async fn test_top_markets_prefix_of_volume_ranking() {
    let snapshot = snapshot_of(mixed_listing()).await;

    for category in &snapshot.categories {
        let mut ranked: Vec<MarketView> = category.markets.clone();
        ranked.sort_by(|a, b| b.volume.partial_cmp(&a.volume).unwrap());

        let expected_len = ranked.len().min(10);
        assert_eq!(category.top_markets.len(), expected_len);
        assert_eq!(category.top_markets[..], ranked[..expected_len]);
        assert_eq!(category.top_market.as_ref(), category.top_markets.first());
    }
}

#[tokio::test]
async fn test_categories_ordered_by_total_volume() {
    let listing = mixed_listing();
    let snapshot = snapshot_of(listing.clone()).await;

    let resolver = CategoryResolver::default();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, r) in listing.iter().enumerate() {
        first_seen.entry(resolver.resolve(r)).or_insert(i);
    }

    for pair in snapshot.categories.windows(2) {
        assert!(pair[0].total_volume >= pair[1].total_volume);
        if pair[0].total_volume == pair[1].total_volume {
            assert!(first_seen[pair[0].name.as_str()] < first_seen[pair[1].name.as_str()]);
        }
    }
}

#[tokio::test]
async fn test_equal_category_totals_keep_encounter_order() {
    let listing = vec![
        record("1", Some("Beta"), "x", 100.0),
        record("2", Some("Alpha"), "x", 100.0),
        record("3", Some("Gamma"), "x", 100.0),
    ];
    let snapshot = snapshot_of(listing).await;
    let names: Vec<&str> = snapshot.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
}

#[tokio::test]
async fn test_keyword_precedence() {
    let snapshot = snapshot_of(vec![record("1", None, "Trump Senate election polls", 10.0)]).await;
    assert_eq!(snapshot.categories.len(), 1);
    assert_eq!(snapshot.categories[0].name, "Elections");
}

#[tokio::test]
async fn test_explicit_category_not_second_guessed() {
    let snapshot = snapshot_of(vec![record("1", Some("Crypto"), "Who wins the Oscars?", 10.0)]).await;
    assert_eq!(snapshot.categories[0].name, "Crypto");
    assert_eq!(snapshot.categories[0].count, 1);
}

#[tokio::test]
async fn test_pagination_termination() {
    let pipeline = Pipeline::new(
        ListingSource::with_page_sizes(vec![200, 200, 53, 0]),
        FetchConfig::default(),
        Aggregator::default(),
    );

    let snapshot = pipeline.run().await.unwrap();
    assert_eq!(snapshot.total_markets, 453);
    assert_eq!(pipeline.source().request_count(), 4);
}

#[tokio::test]
async fn test_pagination_ceiling() {
    let listing: Vec<MarketRecord> = (0..1200)
        .map(|i| record(&format!("m{}", i), Some("Tech"), "x", i as f64))
        .collect();
    let pipeline = Pipeline::new(
        ListingSource::new(listing),
        FetchConfig::default(),
        Aggregator::default(),
    );

    let snapshot = pipeline.run().await.unwrap();
    assert_eq!(snapshot.total_markets, 1000);
    assert_eq!(pipeline.source().request_count(), 5);
}

#[tokio::test]
async fn test_spread_from_outcome_prices() {
    let market: MarketRecord = serde_json::from_str(
        r#"{"id": "p8", "question": "Fed cut?", "category": "Economy", "outcomePrices": ["0.7", "0.3"]}"#,
    )
    .unwrap();
    let snapshot = snapshot_of(vec![market]).await;

    let view = &snapshot.categories[0].top_markets[0];
    assert_eq!(view.yes_price, 0.7);
    assert_eq!(view.no_price, 0.3);
    assert!((view.spread - 0.4).abs() < 1e-12);
}

#[tokio::test]
async fn test_missing_data_defaults() {
    let with_category: MarketRecord =
        serde_json::from_str(r#"{"id": "a", "question": "Anything", "category": "Misc"}"#).unwrap();
    let without: MarketRecord =
        serde_json::from_str(r#"{"id": "b", "question": "Will it snow in Oslo?"}"#).unwrap();
    let snapshot = snapshot_of(vec![with_category, without]).await;

    assert_eq!(snapshot.categories.len(), 2);
    for category in &snapshot.categories {
        let view = &category.top_markets[0];
        assert_eq!(view.volume, 0.0);
        assert_eq!(view.liquidity, 0.0);
        assert_eq!(view.yes_price, 0.0);
        assert_eq!(view.no_price, 0.0);
        assert_eq!(category.total_volume, 0.0);
    }
    assert_eq!(category(&snapshot, "Misc").count, 1);
    assert_eq!(category(&snapshot, "Outros").count, 1);
}

#[tokio::test]
async fn test_two_record_scenario() {
    let bitcoin: MarketRecord = serde_json::from_str(
        r#"{"id": "btc", "category": null, "question": "Will Bitcoin hit $100k?", "volume": "500"}"#,
    )
    .unwrap();
    let super_bowl: MarketRecord = serde_json::from_str(
        r#"{"id": "sb", "category": "Sports", "question": "Super Bowl winner?", "volume": "1000"}"#,
    )
    .unwrap();

    let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
    let pipeline = Pipeline::new(
        ListingSource::new(vec![bitcoin, super_bowl]),
        FetchConfig::default(),
        Aggregator::default(),
    );
    let snapshot = pipeline.run_at(at).await.unwrap();

    assert_eq!(snapshot.generated_at, at);
    assert_eq!(snapshot.total_markets, 2);

    let summary: Vec<(&str, f64)> = snapshot
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.total_volume))
        .collect();
    assert_eq!(summary, vec![("Sports", 1000.0), ("Crypto", 500.0)]);

    let global: Vec<(&str, &str)> = snapshot
        .top_markets_globally
        .iter()
        .map(|m| (m.market.id.as_str(), m.category.as_str()))
        .collect();
    assert_eq!(global, vec![("sb", "Sports"), ("btc", "Outros")]);
}

#[tokio::test]
async fn test_inference_disabled_from_config() {
    let mut config = Config::default();
    config.pipeline.infer_categories = false;

    let pipeline = Pipeline::from_config(
        ListingSource::new(vec![
            record("1", None, "Will Bitcoin hit $100k?", 5.0),
            record("2", Some("Sports"), "NBA Finals MVP?", 1.0),
        ]),
        &config,
    );
    let snapshot = pipeline.run().await.unwrap();

    let names: Vec<&str> = snapshot.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Outros", "Sports"]);
}

#[tokio::test]
async fn test_source_failure_aborts_run() {
    let pipeline = Pipeline::new(DownSource, FetchConfig::default(), Aggregator::default());
    let result = pipeline.run().await;

    match result {
        Err(PipelineError::Source(SourceError::Unavailable { offset, reason })) => {
            assert_eq!(offset, 0);
            assert!(reason.contains("502"));
        }
        other => panic!("expected source failure, got {:?}", other.map(|s| s.total_markets)),
    }
}

#[tokio::test]
async fn test_empty_listing() {
    let snapshot = snapshot_of(vec![]).await;
    assert_eq!(snapshot.total_markets, 0);
    assert!(snapshot.categories.is_empty());
    assert!(snapshot.top_markets_globally.is_empty());
}
