use super::open_store;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::Mutation;
use sitecraft_model::ElementKind;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Element type (paragraph, heading, navbar, ...)
    pub kind: String,

    /// Structure template to expand
    #[arg(short, long)]
    pub structure: Option<String>,

    /// Parent element ID
    #[arg(short, long)]
    pub parent: Option<String>,

    /// Position among siblings
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Heading level
    #[arg(short, long)]
    pub level: Option<u8>,

    /// Text content
    #[arg(short, long)]
    pub content: Option<String>,
}

pub fn add(args: AddArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    let kind = ElementKind::from(args.kind.as_str());
    if let ElementKind::Other(tag) = &kind {
        warn!(kind = %tag, "Unknown element type, it will not render");
    }

    let result = store.apply(Mutation::AddElement {
        kind,
        level: args.level,
        insert_index: args.index,
        parent_id: args.parent,
        structure: args.structure,
    })?;

    let Some(id) = result.created_id else {
        return Ok(());
    };

    if let Some(content) = args.content {
        store.apply(Mutation::UpdateContent {
            id: id.clone(),
            value: content,
        })?;
    }

    let element_count = store.len();
    println!("{} Added {}", "✓".green(), id.bright_white());
    println!("  {} elements in store", element_count);

    Ok(())
}
