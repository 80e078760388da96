//! Pipeline metrics
//!
//! Emitted through the `metrics` facade; they are no-ops until the
//! embedding application installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// One listing page round trip
    PageFetch,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Listing pages received
    PagesFetched,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Markets in the last snapshot
    TotalMarkets,
    /// Categories in the last snapshot
    Categories,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::PageFetch => "polysnap_page_fetch_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Increment a counter by one
pub fn increment_counter(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::PagesFetched => "polysnap_pages_fetched_total",
    };

    metrics::counter!(metric_name).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::TotalMarkets => "polysnap_markets_total",
        GaugeMetric::Categories => "polysnap_categories_total",
    };

    tracing::trace!(metric = metric_name, value = value, "Setting gauge");
    metrics::gauge!(metric_name).set(value);
}
