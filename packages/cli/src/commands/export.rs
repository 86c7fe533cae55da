use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_compiler_html::compile_document;
use sitecraft_editor::Persistence;
use std::fs;
use std::path::Path;
use tracing::info;

const HTML_FILE: &str = "index.html";
const CSS_FILE: &str = "styles.css";

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Compact output
    #[arg(long)]
    pub minify: bool,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let elements = Persistence::file(config.storage_path(cwd)).load();

    let mut options = config.compile_options();
    if args.minify {
        options.pretty = false;
    }

    if args.stdout {
        let page = compile_document(&elements, &options)?;
        println!("{}", page.html);
        return Ok(());
    }

    println!("{}", "🔨 Exporting page...".bright_blue().bold());

    options.stylesheet_href = Some(CSS_FILE.to_string());
    let page = compile_document(&elements, &options)?;

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => config.out_path(cwd),
    };
    fs::create_dir_all(&out_dir)?;

    let html_path = out_dir.join(HTML_FILE);
    let css_path = out_dir.join(CSS_FILE);
    fs::write(&html_path, &page.html)?;
    fs::write(&css_path, &page.css)?;
    info!(elements = elements.len(), out_dir = %out_dir.display(), "Exported page");

    println!("  {} {}", "✓".green(), html_path.display());
    println!("  {} {}", "✓".green(), css_path.display());
    println!();
    println!("{}", "✅ Export complete".green().bold());

    Ok(())
}
