//! Snapshot command implementation

use super::RenderArgs;
use crate::config::Config;
use crate::market::GammaClient;
use crate::pipeline::Pipeline;
use crate::snapshot::write_snapshot;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Snapshot JSON destination (overrides output.snapshot_path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable category inference from question text
    #[arg(long)]
    pub no_infer: bool,

    /// Render the HTML template after writing the snapshot
    #[arg(long)]
    pub render: bool,
}

impl SnapshotArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut config = config.clone();
        if self.no_infer {
            config.pipeline.infer_categories = false;
        }
        if let Some(ref output) = self.output {
            config.output.snapshot_path = output.clone();
        }

        tracing::info!(
            base_url = %config.source.base_url,
            infer_categories = config.pipeline.infer_categories,
            "Fetching active Polymarket markets"
        );

        let client = GammaClient::with_config(config.source.gamma_config())?;
        let snapshot = Pipeline::from_config(client, &config).run().await?;

        write_snapshot(&config.output.snapshot_path, &snapshot)?;
        tracing::info!(
            markets = snapshot.total_markets,
            categories = snapshot.categories.len(),
            path = %config.output.snapshot_path.display(),
            "Snapshot written"
        );

        if self.render {
            let render = RenderArgs {
                snapshot: Some(config.output.snapshot_path.clone()),
                template: None,
                output: None,
            };
            render.execute(&config).await?;
        }

        Ok(())
    }
}
