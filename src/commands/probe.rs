use crate::chapters::format_ms;
use crate::config::Config;
use crate::probe::{DurationResolver, SoxProbe};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct ProbedSegment {
    path: PathBuf,
    duration_ms: u64,
}

/// Print the resolved duration of each segment
pub fn run(files: &[PathBuf], json: bool, sox_override: Option<&Path>) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let resolver = DurationResolver::new(SoxProbe::new(config.sox(sox_override)));

    let mut probed = Vec::with_capacity(files.len());
    for file in files {
        let duration_ms = resolver
            .resolve(file)
            .with_context(|| format!("Failed to probe {}", file.display()))?;
        probed.push(ProbedSegment {
            path: file.clone(),
            duration_ms,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&probed)?);
        return Ok(());
    }

    for segment in &probed {
        let formatted = u32::try_from(segment.duration_ms)
            .map(format_ms)
            .unwrap_or_else(|_| "too long".to_string());
        println!(
            "{}: {} ({} ms)",
            segment.path.display(),
            formatted.cyan(),
            segment.duration_ms
        );
    }

    Ok(())
}
