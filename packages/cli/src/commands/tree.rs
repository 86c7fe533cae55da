use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_editor::{build_hierarchy, HierarchyNode, Persistence};
use std::path::Path;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Print the hierarchy as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn tree(args: TreeArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let elements = Persistence::file(config.storage_path(cwd)).load();
    let roots = build_hierarchy(&elements);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&roots)?);
        return Ok(());
    }

    if roots.is_empty() {
        println!("{}", "⚠️  No elements".yellow());
        return Ok(());
    }

    let mut out = String::new();
    for root in &roots {
        render(root, 0, &mut out);
    }
    print!("{}", out);

    Ok(())
}

fn render(node: &HierarchyNode, depth: usize, out: &mut String) {
    let element = &node.element;
    out.push_str(&"  ".repeat(depth));
    out.push_str(element.kind.as_str());
    out.push_str(&format!(" {}", element.id));
    if let Some(layout) = element.layout() {
        out.push_str(&format!(" [{}]", layout));
    }
    if let Some(text) = element.text() {
        out.push_str(&format!(" \"{}\"", text));
    }
    out.push('\n');

    for child in &node.children {
        render(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_model::{Element, ElementKind};

    #[test]
    fn test_render_outline() {
        let mut list = Element::new("l1", ElementKind::List);
        let mut item = Element::new("i1", ElementKind::ListItem).with_content("One");
        item.parent_id = Some("l1".into());
        list.children.push("i1".into());

        let roots = build_hierarchy(&[list, item]);
        let mut out = String::new();
        render(&roots[0], 0, &mut out);

        assert_eq!(out, "list l1\n  list-item i1 \"One\"\n");
    }
}
