use serde::{Deserialize, Serialize};

/// Chapter frames found in an existing file's tag
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaggedChapters {
    pub episode_title: Option<String>,
    pub toc_title: Option<String>,
    /// Child element ids of the top-level CTOC frame
    pub toc_child_ids: Vec<String>,
    pub chapters: Vec<TaggedChapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggedChapter {
    pub element_id: String,
    pub start_ms: u32,
    pub end_ms: u32,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Size of the embedded picture, if any (the bytes are not kept)
    pub image_bytes: Option<usize>,
}

impl TaggedChapters {
    /// Whether the CTOC children and CHAP frames agree, in order
    pub fn is_consistent(&self) -> bool {
        self.toc_child_ids.len() == self.chapters.len()
            && self
                .toc_child_ids
                .iter()
                .zip(&self.chapters)
                .all(|(id, chapter)| *id == chapter.element_id)
    }
}
