use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mediazion_manual::{generate, ManualConfig};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Build the MEDIAZION manual (HTML + RTF) from the configured source documents"
)]
struct Args {
    /// Directory containing the source documents
    #[arg(short, long, default_value = ".")]
    base_dir: PathBuf,

    /// Output directory for the generated files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Optional JSON file overriding the built-in manual definition
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading manual definition from: {:?}", path);
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            serde_json::from_str(&raw).with_context(|| "Failed to parse config JSON")?
        }
        None => ManualConfig::default(),
    };
    config.validate();

    info!("Generating manual: {} ({})", config.title, config.edition);

    let outputs = generate(&config, &args.base_dir, &args.output)?;

    info!("Done: {:?} and {:?}", outputs.html_path, outputs.rtf_path);

    Ok(())
}
