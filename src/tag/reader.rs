use super::fields::{TaggedChapter, TaggedChapters};
use anyhow::{Context, Result};
use id3::frame::{Content, Frame};
use id3::{Tag, TagLike};
use std::path::Path;

/// Read chapter frames from an mp3's ID3v2 tag
pub fn read_chapters(path: &Path) -> Result<TaggedChapters> {
    let tag = Tag::read_from_path(path)
        .with_context(|| format!("Failed to read ID3 tag: {}", path.display()))?;

    Ok(chapters_from_tag(&tag))
}

pub(crate) fn chapters_from_tag(tag: &Tag) -> TaggedChapters {
    let mut result = TaggedChapters {
        episode_title: tag.title().map(String::from),
        ..TaggedChapters::default()
    };

    for frame in tag.frames() {
        match frame.content() {
            Content::TableOfContents(toc) if toc.top_level => {
                result.toc_child_ids = toc.elements.clone();
                result.toc_title = embedded_title(&toc.frames);
            }
            Content::Chapter(chapter) => {
                result.chapters.push(TaggedChapter {
                    element_id: chapter.element_id.clone(),
                    start_ms: chapter.start_time,
                    end_ms: chapter.end_time,
                    title: embedded_title(&chapter.frames),
                    url: chapter
                        .frames
                        .iter()
                        .find_map(|f| f.content().extended_link())
                        .map(|link| link.link.clone()),
                    image_bytes: chapter
                        .frames
                        .iter()
                        .find_map(|f| f.content().picture())
                        .map(|picture| picture.data.len()),
                });
            }
            _ => {}
        }
    }

    result
}

fn embedded_title(frames: &[Frame]) -> Option<String> {
    frames
        .iter()
        .find(|f| f.id() == "TIT2")
        .and_then(|f| f.content().text())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::writer::tests::sample_tree;
    use crate::tag::writer::{apply_tree, write_tree};
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_file_returns_error() {
        let result = read_chapters(Path::new("/nonexistent/episode.mp3"));
        assert!(result.is_err());
    }

    #[test]
    fn test_chapters_from_tag() {
        let mut tag = Tag::new();
        apply_tree(&mut tag, &sample_tree(), Some("Poems, episode 1"));

        let chapters = chapters_from_tag(&tag);
        assert_eq!(chapters.episode_title.as_deref(), Some("Poems, episode 1"));
        assert_eq!(chapters.toc_title.as_deref(), Some("Table of Contents"));
        assert_eq!(chapters.toc_child_ids, vec!["CH1", "CH2"]);
        assert!(chapters.is_consistent());
        assert_eq!(
            chapters.chapters[0],
            TaggedChapter {
                element_id: "CH1".to_string(),
                start_ms: 1,
                end_ms: 5000,
                title: Some("Poem 1".to_string()),
                url: Some("https://example.com/poems/1".to_string()),
                image_bytes: Some(4),
            }
        );
    }

    #[test]
    fn test_write_then_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("episode.mp3");
        std::fs::write(&path, b"").unwrap();

        write_tree(&path, &sample_tree(), Some("Poems, episode 1")).unwrap();
        let chapters = read_chapters(&path).unwrap();

        assert_eq!(chapters.chapters.len(), 2);
        assert_eq!(chapters.chapters[1].start_ms, 5001);
        assert_eq!(chapters.chapters[1].end_ms, 8000);
        assert!(chapters.is_consistent());
    }
}
