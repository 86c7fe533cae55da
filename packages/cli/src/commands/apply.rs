use super::open_store;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sitecraft_editor::Mutation;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of mutations
    pub file: PathBuf,
}

/// Apply a batch of mutations in order. Mutations that target a missing
/// element are reported as skipped; a structural error stops the batch.
pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = cwd.join(&args.file);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid mutation batch in {}", path.display()))?;

    let mut store = open_store(&config, cwd);
    let mut applied = 0;
    let mut skipped = 0;

    for (index, mutation) in mutations.into_iter().enumerate() {
        let result = store
            .apply(mutation)
            .with_context(|| format!("Mutation #{} failed", index))?;

        match (result.applied, result.created_id) {
            (true, Some(id)) => {
                applied += 1;
                println!("  {} #{} created {}", "✓".green(), index, id.bright_white());
            }
            (true, None) => applied += 1,
            (false, _) => {
                skipped += 1;
                println!("  {} #{} target not found", "⚠️".yellow(), index);
            }
        }
    }

    println!();
    println!(
        "{} {} applied, {} skipped",
        "✅".green(),
        applied,
        skipped
    );

    Ok(())
}
