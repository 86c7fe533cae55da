mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, apply, export, init, templates, tree, AddArgs, ApplyArgs, ExportArgs, InitArgs, TreeArgs,
};
use tracing_subscriber::EnvFilter;

/// Sitecraft CLI - build pages from element trees and export static sites
#[derive(Parser, Debug)]
#[command(name = "sitecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Sitecraft project
    Init(InitArgs),

    /// Add an element to the page
    Add(AddArgs),

    /// Apply a JSON batch of mutations
    Apply(ApplyArgs),

    /// Export the page as index.html and styles.css
    Export(ExportArgs),

    /// Print the element hierarchy
    Tree(TreeArgs),

    /// List built-in structure templates
    Templates,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SITECRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Add(args) => add(args, &cwd),
            Command::Apply(args) => apply(args, &cwd),
            Command::Export(args) => export(args, &cwd),
            Command::Tree(args) => tree(args, &cwd),
            Command::Templates => templates(),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
