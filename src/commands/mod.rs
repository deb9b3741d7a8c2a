pub mod build;
pub mod plan;
pub mod probe;
pub mod show;
pub mod tag;

use crate::chapters::{attach_durations, build_tree, validate, ChapterAssembler, ChapterTree};
use crate::config::Config;
use crate::manifest::Manifest;
use crate::probe::{resolve_concurrent, DurationResolver, SoxProbe};
use crate::storage::FsImageStore;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Probe and assemble the chapters of `manifest`.
///
/// Segments are probed concurrently unless `sequential` is set; either way
/// the fold sees them in manifest order.
pub fn assemble_manifest(
    manifest: &Manifest,
    config: &Config,
    sox: &Path,
    sequential: bool,
) -> Result<ChapterTree> {
    let descriptors = manifest.descriptors();
    let labels = config.labels();
    let store = FsImageStore::with_base(manifest.input_dir());

    info!(
        "Assembling {} chapter(s) ({} probing)",
        descriptors.len(),
        if sequential { "sequential" } else { "concurrent" }
    );

    let result = if sequential {
        ChapterAssembler::new(SoxProbe::new(sox), store)
            .with_labels(labels)
            .assemble(&descriptors)
    } else {
        let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        validate(&descriptors).and_then(|()| {
            let resolver = Arc::new(DurationResolver::new(SoxProbe::new(sox)));
            let segments = descriptors.iter().map(|d| d.segment_ref.clone()).collect();
            let results = rt.block_on(resolve_concurrent(resolver, segments));
            let resolved = attach_durations(&descriptors, results)?;
            build_tree(&resolved, &store, &labels)
        })
    };

    result.map_err(|e| {
        let summary = match e.ordinal() {
            Some(ordinal) => format!(
                "Chapter assembly failed at chapter {} ({} error)",
                ordinal,
                e.kind()
            ),
            None => format!("Chapter assembly failed ({} error)", e.kind()),
        };
        anyhow::Error::new(e).context(summary)
    })
}

/// Load config and manifest, the common prelude of manifest-driven commands
pub fn load_inputs(manifest_path: &Path) -> Result<(Config, Manifest)> {
    let config = Config::load().context("Failed to load config")?;
    let manifest = Manifest::load(manifest_path)?;
    Ok((config, manifest))
}
