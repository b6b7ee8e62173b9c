//! Score ledger: one `name,score` line appended per finished session.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const PLAYER_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Hank",
];

/// Append a score record to the ledger, creating the file if needed.
/// Existing records are never rewritten.
pub fn append_score(path: &Path, player_name: &str, score: u32) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open score ledger {}", path.display()))?;
    writeln!(file, "{player_name},{score}")
        .with_context(|| format!("failed to append to score ledger {}", path.display()))?;
    Ok(())
}

/// Pick a name for the score record from the fixed roster.
pub fn random_player_name() -> &'static str {
    PLAYER_NAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Anon")
}
