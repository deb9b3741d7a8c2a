//! Joining chapter segments into one episode file

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Concatenate `segments` in order into `output` with sox
pub fn concatenate(sox: &Path, segments: &[PathBuf], output: &Path) -> Result<()> {
    if segments.is_empty() {
        bail!("No segments to concatenate");
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    debug!(
        "{} {} segment(s) -> {}",
        sox.display(),
        segments.len(),
        output.display()
    );

    let result = Command::new(sox)
        .args(segments)
        .arg(output)
        .output()
        .with_context(|| format!("Failed to run {}", sox.display()))?;

    if !result.status.success() {
        bail!(
            "{} exited with code {}: {}",
            sox.display(),
            result.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&result.stderr).trim()
        );
    }

    info!("Wrote combined audio to {}", output.display());
    Ok(())
}
