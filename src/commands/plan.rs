use super::{assemble_manifest, load_inputs};
use crate::chapters::{format_ms, render_tree};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Probe and assemble without writing anything
pub fn run(
    manifest_path: &Path,
    json: bool,
    sequential: bool,
    sox_override: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let (config, manifest) = load_inputs(manifest_path)?;
    let sox = config.sox(sox_override);
    let tree = assemble_manifest(&manifest, &config, &sox, sequential)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if !quiet {
        let title = manifest.title.as_deref().unwrap_or("(untitled episode)");
        println!("{}", title.bold());
        println!("{}", "─".repeat(40));
    }

    print!("{}", render_tree(&tree));

    if !quiet {
        println!();
        println!(
            "{} chapter(s), {} total",
            tree.chapters.len(),
            format_ms(tree.total_duration_ms()).cyan()
        );
    }

    Ok(())
}
