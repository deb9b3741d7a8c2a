use super::{assemble_manifest, load_inputs};
use crate::chapters::render_tree;
use crate::safety::create_backup;
use crate::tag::write_tree;
use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

/// Attach a manifest's chapters to an already combined episode file
pub fn run(
    manifest_path: &Path,
    file: &Path,
    no_dry_run: bool,
    no_backup: bool,
    sequential: bool,
    sox_override: Option<&Path>,
) -> Result<()> {
    if !file.exists() {
        bail!("Episode file does not exist: {}", file.display());
    }

    let (config, manifest) = load_inputs(manifest_path)?;
    let sox = config.sox(sox_override);
    let tree = assemble_manifest(&manifest, &config, &sox, sequential)?;

    println!("{}", file.display().to_string().bold());
    print!("{}", render_tree(&tree));

    if !no_dry_run {
        println!();
        println!("{}", "Dry run: no changes written.".yellow());
        println!(
            "To apply: podchap tag \"{}\" \"{}\" --no-dry-run",
            manifest_path.display(),
            file.display()
        );
        return Ok(());
    }

    if !no_backup {
        let backup = create_backup(file)?;
        println!("Backup created: {}", backup.display());
    }

    write_tree(file, &tree, manifest.title.as_deref())?;
    println!(
        "{} {} chapter(s) written",
        "✓".green(),
        tree.chapters.len()
    );

    Ok(())
}
