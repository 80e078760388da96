//! poly-snapshot: categorized snapshot of active Polymarket markets
//!
//! This library provides the core components for:
//! - Paginated market listing from the Gamma API
//! - Category resolution (explicit label or keyword inference)
//! - Per-category aggregation and volume rankings
//! - Snapshot assembly, JSON output and HTML page rendering
//! - Structured logging and metrics

pub mod aggregate;
pub mod category;
pub mod cli;
pub mod config;
pub mod market;
pub mod pipeline;
pub mod snapshot;
pub mod telemetry;
