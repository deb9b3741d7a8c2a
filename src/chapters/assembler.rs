use super::error::{ChapterError, ChapterResult};
use super::model::{
    chapter_element_id, ChapterDescriptor, ChapterNode, ChapterRange, ChapterTree, ImageFrame,
    ImageRole, ResolvedChapter, TitleFrame, TocNode, UrlFrame, JPEG_MIME, TOC_ELEMENT_ID,
};
use crate::probe::{DurationProbe, DurationResolver, ProbeError};
use crate::storage::ImageStore;
use tracing::{debug, info};

pub const DEFAULT_TOC_TITLE: &str = "Table of Contents";
pub const DEFAULT_URL_DESCRIPTION: &str = "chapter URL";

/// Fixed text attached to every tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub toc_title: String,
    pub url_description: String,
    pub image_role: ImageRole,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            url_description: DEFAULT_URL_DESCRIPTION.to_string(),
            image_role: ImageRole::default(),
        }
    }
}

/// Validates descriptors, resolves their durations and builds the chapter tree
pub struct ChapterAssembler<P, S> {
    resolver: DurationResolver<P>,
    store: S,
    labels: Labels,
}

impl<P: DurationProbe, S: ImageStore> ChapterAssembler<P, S> {
    pub fn new(probe: P, store: S) -> Self {
        Self {
            resolver: DurationResolver::new(probe),
            store,
            labels: Labels::default(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Build the tree for `descriptors`, probing each segment in order.
    ///
    /// Any failure aborts the whole assembly; no partial tree is returned.
    pub fn assemble(&self, descriptors: &[ChapterDescriptor]) -> ChapterResult<ChapterTree> {
        validate(descriptors)?;
        let resolved = resolve_chapters(&self.resolver, descriptors)?;
        build_tree(&resolved, &self.store, &self.labels)
    }
}

/// Check the input constraints before any probing happens
pub fn validate(descriptors: &[ChapterDescriptor]) -> ChapterResult<()> {
    if descriptors.is_empty() {
        return Err(ChapterError::Validation(
            "at least one chapter is required".to_string(),
        ));
    }

    for (i, descriptor) in descriptors.iter().enumerate() {
        validate_descriptor(i + 1, descriptor)?;
    }

    Ok(())
}

fn validate_descriptor(ordinal: usize, descriptor: &ChapterDescriptor) -> ChapterResult<()> {
    let invalid = |reason: String| ChapterError::InvalidChapter {
        ordinal,
        title: descriptor.title.clone(),
        reason,
    };

    if descriptor.title.trim().is_empty() {
        return Err(invalid("title is empty".to_string()));
    }

    check_url(&descriptor.url)
        .map_err(|reason| invalid(format!("{}: {:?}", reason, descriptor.url)))
}

/// Minimal syntactic URL check: http(s) scheme, a host, no whitespace
fn check_url(url: &str) -> Result<(), &'static str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or("URL must start with http:// or https://")?;

    if url.chars().any(char::is_whitespace) {
        return Err("URL contains whitespace");
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return Err("URL has no host");
    }

    Ok(())
}

/// Probe every segment in input order, stopping at the first failure
pub fn resolve_chapters<P: DurationProbe>(
    resolver: &DurationResolver<P>,
    descriptors: &[ChapterDescriptor],
) -> ChapterResult<Vec<ResolvedChapter>> {
    let results = descriptors
        .iter()
        .map(|d| resolver.resolve(&d.segment_ref));
    attach_durations(descriptors, results)
}

/// Pair descriptors with probe results obtained elsewhere (e.g. concurrently).
///
/// The first failure in input order wins.
pub fn attach_durations(
    descriptors: &[ChapterDescriptor],
    results: impl IntoIterator<Item = Result<u64, ProbeError>>,
) -> ChapterResult<Vec<ResolvedChapter>> {
    let mut resolved = Vec::with_capacity(descriptors.len());

    for ((i, descriptor), result) in descriptors.iter().enumerate().zip(results) {
        let duration_ms = result.map_err(|source| ChapterError::Resolution {
            ordinal: i + 1,
            title: descriptor.title.clone(),
            source,
        })?;
        resolved.push(ResolvedChapter::new(descriptor.clone(), duration_ms));
    }

    if resolved.len() != descriptors.len() {
        return Err(ChapterError::Validation(format!(
            "expected {} durations, got {}",
            descriptors.len(),
            resolved.len()
        )));
    }

    Ok(resolved)
}

/// Fold resolved chapters into the TOC and chapter nodes
pub fn build_tree<S: ImageStore>(
    resolved: &[ResolvedChapter],
    store: &S,
    labels: &Labels,
) -> ChapterResult<ChapterTree> {
    if resolved.is_empty() {
        return Err(ChapterError::Validation(
            "at least one chapter is required".to_string(),
        ));
    }

    let mut chapters = Vec::with_capacity(resolved.len());
    let mut child_ids = Vec::with_capacity(resolved.len());
    let mut prev_end_ms = 0u32;

    for (i, chapter) in resolved.iter().enumerate() {
        let ordinal = i + 1;
        let descriptor = &chapter.descriptor;
        validate_descriptor(ordinal, descriptor)?;

        if chapter.duration_ms == 0 {
            return Err(ChapterError::InvalidChapter {
                ordinal,
                title: descriptor.title.clone(),
                reason: "segment is shorter than one second".to_string(),
            });
        }

        let range = ChapterRange::following(prev_end_ms, chapter.duration_ms).map_err(|end_ms| {
            ChapterError::TimeOverflow {
                ordinal,
                title: descriptor.title.clone(),
                end_ms,
            }
        })?;
        prev_end_ms = range.end_ms;

        let data = store
            .read_bytes(&descriptor.image_ref)
            .map_err(|source| ChapterError::Storage {
                ordinal,
                title: descriptor.title.clone(),
                image: descriptor.image_ref.display().to_string(),
                source,
            })?;

        let element_id = chapter_element_id(ordinal);
        debug!(
            "{} {:?}: {}..{} ms",
            element_id, descriptor.title, range.start_ms, range.end_ms
        );

        child_ids.push(element_id.clone());
        chapters.push(ChapterNode {
            element_id,
            range,
            title: TitleFrame {
                text: descriptor.title.clone(),
            },
            image: ImageFrame {
                mime_type: JPEG_MIME.to_string(),
                role: labels.image_role,
                data,
            },
            url: UrlFrame {
                description: labels.url_description.clone(),
                url: descriptor.url.clone(),
            },
        });
    }

    info!(
        "Assembled {} chapters spanning {} ms",
        chapters.len(),
        prev_end_ms
    );

    Ok(ChapterTree {
        toc: TocNode {
            element_id: TOC_ELEMENT_ID.to_string(),
            is_top_level: true,
            is_ordered: true,
            child_ids,
            title: TitleFrame {
                text: labels.toc_title.clone(),
            },
        },
        chapters,
    })
}
