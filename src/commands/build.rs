use super::{assemble_manifest, load_inputs};
use crate::audio::concatenate;
use crate::chapters::{format_ms, ChapterTree};
use crate::tag::write_tree;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Probe, assemble, concatenate and tag a whole episode
pub fn run(
    manifest_path: &Path,
    output_override: Option<&Path>,
    sequential: bool,
    sox_override: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let (config, manifest) = load_inputs(manifest_path)?;
    let sox = config.sox(sox_override);
    let output = manifest.output_path(output_override, config.output.dir.as_deref());

    // Assemble first so a bad chapter never leaves a half-built episode behind
    let tree = assemble_manifest(&manifest, &config, &sox, sequential)?;

    let segments: Vec<PathBuf> = manifest
        .descriptors()
        .into_iter()
        .map(|d| d.segment_ref)
        .collect();
    concatenate(&sox, &segments, &output).context("Failed to create combined episode")?;

    discard_on_error(&output, || write_tree(&output, &tree, manifest.title.as_deref()))?;
    info!("Tagged {} with {} chapters", output.display(), tree.chapters.len());

    if !quiet {
        print_summary(&tree, &output);
    }

    Ok(())
}

/// Run `step` against the freshly written `output`, deleting the file if it fails
fn discard_on_error<T>(output: &Path, step: impl FnOnce() -> Result<T>) -> Result<T> {
    step().inspect_err(|_| {
        if let Err(e) = std::fs::remove_file(output) {
            warn!("Failed to remove untagged episode {}: {}", output.display(), e);
        }
    })
}

fn print_summary(tree: &ChapterTree, output: &Path) {
    println!("{} {}", "Wrote".green().bold(), output.display());
    for chapter in &tree.chapters {
        println!(
            "  {:>5}  {} - {}  {}",
            chapter.element_id.cyan(),
            format_ms(chapter.range.start_ms),
            format_ms(chapter.range.end_ms),
            chapter.title.text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use tempfile::TempDir;

    #[test]
    fn test_failed_tag_write_removes_episode() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("episode.mp3");
        std::fs::write(&output, b"combined audio").unwrap();

        let result: Result<()> = discard_on_error(&output, || bail!("tag write failed"));

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_successful_tag_write_keeps_episode() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("episode.mp3");
        std::fs::write(&output, b"combined audio").unwrap();

        discard_on_error(&output, || Ok(())).unwrap();

        assert!(output.exists());
    }
}
