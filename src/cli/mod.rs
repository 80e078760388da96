//! CLI interface for poly-snapshot
//!
//! Provides subcommands for:
//! - `snapshot`: Fetch markets and write the snapshot JSON
//! - `render`: Inject a snapshot into the HTML page
//! - `config`: Show the effective configuration

mod render;
mod snapshot;

pub use render::RenderArgs;
pub use snapshot::SnapshotArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poly-snapshot")]
#[command(about = "Categorized volume/liquidity snapshot of active Polymarket markets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch active markets and write the snapshot JSON
    Snapshot(SnapshotArgs),
    /// Inject the snapshot JSON into the HTML template
    Render(RenderArgs),
    /// Show configuration
    Config,
}
