use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Reserved time value meaning "time field unused, read the byte offsets instead".
pub const TIME_SENTINEL: u32 = 0xFFFF_FFFF;

/// Element id of the table-of-contents node.
pub const TOC_ELEMENT_ID: &str = "TOC";

/// MIME type written for every chapter image.
pub const JPEG_MIME: &str = "image/jpeg";

/// One entry of the episode, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDescriptor {
    pub title: String,
    pub image_ref: PathBuf,
    pub url: String,
    pub segment_ref: PathBuf,
}

/// A descriptor whose audio segment has been measured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChapter {
    pub descriptor: ChapterDescriptor,
    pub duration_ms: u64,
}

impl ResolvedChapter {
    pub fn new(descriptor: ChapterDescriptor, duration_ms: u64) -> Self {
        Self {
            descriptor,
            duration_ms,
        }
    }
}

/// Millisecond time range of a chapter within the combined audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterRange {
    pub start_ms: u32,
    pub end_ms: u32,
}

impl ChapterRange {
    /// Range following a chapter that ended at `prev_end_ms`.
    ///
    /// Returns the would-be end time when it reaches the sentinel or does not
    /// fit in 32 bits.
    pub fn following(prev_end_ms: u32, duration_ms: u64) -> Result<Self, u64> {
        let start = u64::from(prev_end_ms) + 1;
        let end = u64::from(prev_end_ms) + duration_ms;

        if end >= u64::from(TIME_SENTINEL) {
            return Err(end);
        }

        Ok(Self {
            start_ms: start as u32,
            end_ms: end as u32,
        })
    }
}

/// Role an embedded picture plays, mapped to the ID3 picture type by the tag adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRole {
    #[default]
    CoverFront,
    Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleFrame {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFrame {
    pub mime_type: String,
    pub role: ImageRole,
    #[serde(rename = "size_bytes", serialize_with = "serialize_len")]
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFrame {
    pub description: String,
    pub url: String,
}

fn serialize_len<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(data.len() as u64)
}

/// Leaf node embedded in a chapter or TOC node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubFrame<'a> {
    Title(&'a TitleFrame),
    Image(&'a ImageFrame),
    Url(&'a UrlFrame),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterNode {
    pub element_id: String,
    pub range: ChapterRange,
    pub title: TitleFrame,
    pub image: ImageFrame,
    pub url: UrlFrame,
}

impl ChapterNode {
    /// Embedded frames in the order they are attached to the chapter
    pub fn sub_frames(&self) -> [SubFrame<'_>; 3] {
        [
            SubFrame::Title(&self.title),
            SubFrame::Image(&self.image),
            SubFrame::Url(&self.url),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    pub element_id: String,
    pub is_top_level: bool,
    pub is_ordered: bool,
    pub child_ids: Vec<String>,
    pub title: TitleFrame,
}

/// Top-level node of the tree, in the order an adapter should emit them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Toc(&'a TocNode),
    Chapter(&'a ChapterNode),
}

/// Table of contents plus its chapters; a strict two-level tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterTree {
    pub toc: TocNode,
    pub chapters: Vec<ChapterNode>,
}

impl ChapterTree {
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        std::iter::once(Node::Toc(&self.toc)).chain(self.chapters.iter().map(Node::Chapter))
    }

    /// End of the last chapter, i.e. the combined audio length as the tree sees it
    pub fn total_duration_ms(&self) -> u32 {
        self.chapters.last().map(|c| c.range.end_ms).unwrap_or(0)
    }
}

/// Element id for the chapter at 1-based `ordinal`
pub fn chapter_element_id(ordinal: usize) -> String {
    format!("CH{}", ordinal)
}
