use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use navquill::config::Config;
use navquill::script::loader::{load_script_file, load_script_from_stdin};
use navquill::script::replay;

/// NavQuill - replay recorded editor sessions through the navigation history
#[derive(Parser)]
#[command(name = "navquill")]
#[command(version)]
#[command(about = "Replays a recorded editor session and reports navigation history and highlight updates", long_about = None)]
struct Cli {
    /// Session script (YAML, optionally .gz); use - to read from stdin
    script: String,

    /// Config file (default: ~/.config/navquill/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    // RUST_LOG takes precedence over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = if cli.script == "-" {
        load_script_from_stdin()?
    } else {
        load_script_file(&cli.script)?
    };
    tracing::info!(
        "Replaying {} events over {} documents",
        script.events.len(),
        script.documents.len()
    );

    let report = replay(&script, &config).context("Replay failed")?;

    match cli.format {
        Format::Text => print!("{}", report),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}
