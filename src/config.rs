//! Configuration types for poly-snapshot

use crate::aggregate::{DEFAULT_TOP_GLOBAL, DEFAULT_TOP_PER_CATEGORY};
use crate::market::{FetchConfig, GammaConfig, GAMMA_API_URL};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Market listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Gamma API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Pagination ceiling; markets past this offset are not fetched
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

fn default_base_url() -> String {
    GAMMA_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_page_size() -> usize {
    200
}
fn default_max_records() -> usize {
    1000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            max_records: default_max_records(),
        }
    }
}

impl SourceConfig {
    /// Gamma client settings
    pub fn gamma_config(&self) -> GammaConfig {
        GammaConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Pagination settings
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_size: self.page_size,
            max_records: self.max_records,
        }
    }
}

/// Aggregation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Infer a category from the question when the API gives none
    #[serde(default = "default_true")]
    pub infer_categories: bool,

    /// Top markets listed per category
    #[serde(default = "default_top_per_category")]
    pub top_per_category: usize,

    /// Length of the global ranking
    #[serde(default = "default_top_global")]
    pub top_global: usize,
}

fn default_true() -> bool {
    true
}
fn default_top_per_category() -> usize {
    DEFAULT_TOP_PER_CATEGORY
}
fn default_top_global() -> usize {
    DEFAULT_TOP_GLOBAL
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            infer_categories: true,
            top_per_category: DEFAULT_TOP_PER_CATEGORY,
            top_global: DEFAULT_TOP_GLOBAL,
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Snapshot JSON destination
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// HTML template, overwritten in place by `render`
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data.json")
}
fn default_template_path() -> PathBuf {
    PathBuf::from("index.html")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            template_path: default_template_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
