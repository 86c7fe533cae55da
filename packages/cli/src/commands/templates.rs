use anyhow::Result;
use colored::Colorize;
use sitecraft_editor::StructureRegistry;

/// List the built-in structure templates
pub fn templates() -> Result<()> {
    let registry = StructureRegistry::builtin();

    for name in registry.names() {
        if let Some(template) = registry.get(name) {
            println!(
                "  {} {} ({} children)",
                name.bright_white(),
                template.container.as_str().dimmed(),
                template.children.len()
            );
        }
    }

    Ok(())
}
