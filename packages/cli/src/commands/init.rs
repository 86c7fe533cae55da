use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::Persistence;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for the persisted element store
    #[arg(short, long, default_value = ".sitecraft")]
    pub storage_dir: String,

    /// Export output directory
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Page title
    #[arg(short, long, default_value = "Sitecraft Page")]
    pub title: String,

    /// Force overwrite existing config and reset the store
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Sitecraft project...".bright_blue().bold());

    let config = Config {
        storage_dir: args.storage_dir,
        out_dir: args.out_dir,
        title: args.title,
        ..Default::default()
    };

    let storage = config.storage_path(cwd);
    Persistence::file(&storage).save(&[])?;
    println!("  {} Created {}/", "✓".green(), config.storage_dir);

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sitecraft add navbar --structure twoColumn");
    println!("  2. Run: sitecraft export");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
