use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gem_chase::game::{Difficulty, GameConfig};
use gem_chase::modes::HumanMode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gem_chase")]
#[command(version, about = "Collect gems, dodge enemies, grab power-ups")]
struct Cli {
    /// Path to a JSON settings file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty preset (adjusts obstacle and enemy counts)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Score ledger file
    #[arg(long, default_value = "scores.csv")]
    scores: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so logging never fights the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config errors are fatal at startup.
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    config.validate()?;
    info!(?config, "starting session");

    let mut human_mode = HumanMode::new(config, cli.scores);
    human_mode.run().await?;

    Ok(())
}
