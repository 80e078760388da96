//! Render command implementation

use crate::config::Config;
use crate::snapshot::render_file;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Snapshot JSON to inject (overrides output.snapshot_path)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// HTML template (overrides output.template_path)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Write the page here instead of overwriting the template
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let snapshot_path = self
            .snapshot
            .clone()
            .unwrap_or_else(|| config.output.snapshot_path.clone());
        let template_path = self
            .template
            .clone()
            .unwrap_or_else(|| config.output.template_path.clone());
        let output_path = self.output.clone().unwrap_or_else(|| template_path.clone());

        let snapshot = render_file(
            &snapshot_path,
            &template_path,
            &output_path,
            chrono::Local::now(),
        )?;

        tracing::info!(
            markets = snapshot.total_markets,
            categories = snapshot.categories.len(),
            path = %output_path.display(),
            "Page rendered"
        );

        Ok(())
    }
}
