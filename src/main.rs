use clap::Parser;
use poly_snapshot::cli::{Cli, Commands};
use poly_snapshot::config::Config;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: could not load config from {}: {:#}", cli.config, e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        eprintln!("Warning: {} not found, using default configuration", cli.config);
        Config::default()
    };

    // Initialize telemetry
    if let Err(e) = poly_snapshot::telemetry::init_telemetry(&config.telemetry) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Snapshot(args) => {
            tracing::info!("Starting snapshot");
            args.execute(config).await?;
        }
        Commands::Render(args) => {
            tracing::info!("Rendering page");
            args.execute(config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Source: {} (page_size={}, max_records={}, timeout={}s)",
                config.source.base_url,
                config.source.page_size,
                config.source.max_records,
                config.source.timeout_secs
            );
            println!(
                "  Pipeline: infer_categories={}, top_per_category={}, top_global={}",
                config.pipeline.infer_categories,
                config.pipeline.top_per_category,
                config.pipeline.top_global
            );
            println!(
                "  Output: snapshot={}, template={}",
                config.output.snapshot_path.display(),
                config.output.template_path.display()
            );
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
