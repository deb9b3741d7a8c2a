use crate::chapters::{ChapterNode, ChapterTree, ImageRole, Node, SubFrame, TocNode, TIME_SENTINEL};
use anyhow::{Context, Result};
use id3::frame::{Chapter, Content, ExtendedLink, Frame, Picture, PictureType, TableOfContents};
use id3::{Tag, TagLike, Version};
use std::path::Path;
use tracing::debug;

/// Attach the chapter tree to the ID3v2 tag of `path` and save it
pub fn write_tree(path: &Path, tree: &ChapterTree, episode_title: Option<&str>) -> Result<()> {
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => Tag::new(),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read tag for writing: {}", path.display()))
        }
    };

    apply_tree(&mut tag, tree, episode_title);

    tag.write_to_path(path, Version::Id3v24)
        .with_context(|| format!("Failed to write chapters to: {}", path.display()))?;

    Ok(())
}

/// Replace any chapter frames in `tag` with those of `tree`
pub fn apply_tree(tag: &mut Tag, tree: &ChapterTree, episode_title: Option<&str>) {
    if let Some(title) = episode_title {
        tag.set_title(title);
    }

    let removed = tag.remove("CTOC").len() + tag.remove("CHAP").len();
    if removed > 0 {
        debug!("Replacing {} existing chapter frame(s)", removed);
    }

    for node in tree.nodes() {
        let frame = match node {
            Node::Toc(toc) => toc_frame(toc),
            Node::Chapter(chapter) => chapter_frame(chapter),
        };
        tag.add_frame(frame);
    }
}

pub fn toc_frame(toc: &TocNode) -> Frame {
    Frame::with_content(
        "CTOC",
        Content::TableOfContents(TableOfContents {
            element_id: toc.element_id.clone(),
            top_level: toc.is_top_level,
            ordered: toc.is_ordered,
            elements: toc.child_ids.clone(),
            frames: vec![Frame::text("TIT2", toc.title.text.clone())],
        }),
    )
}

/// CHAP frame addressed by time only; byte offsets carry the sentinel
pub fn chapter_frame(chapter: &ChapterNode) -> Frame {
    Frame::with_content(
        "CHAP",
        Content::Chapter(Chapter {
            element_id: chapter.element_id.clone(),
            start_time: chapter.range.start_ms,
            end_time: chapter.range.end_ms,
            start_offset: TIME_SENTINEL,
            end_offset: TIME_SENTINEL,
            frames: chapter.sub_frames().iter().map(sub_frame).collect(),
        }),
    )
}

fn sub_frame(frame: &SubFrame<'_>) -> Frame {
    match frame {
        SubFrame::Title(title) => Frame::text("TIT2", title.text.clone()),
        SubFrame::Image(image) => Frame::with_content(
            "APIC",
            Content::Picture(Picture {
                mime_type: image.mime_type.clone(),
                picture_type: picture_type(image.role),
                description: String::new(),
                data: image.data.clone(),
            }),
        ),
        SubFrame::Url(url) => Frame::with_content(
            "WXXX",
            Content::ExtendedLink(ExtendedLink {
                description: url.description.clone(),
                link: url.url.clone(),
            }),
        ),
    }
}

fn picture_type(role: ImageRole) -> PictureType {
    match role {
        ImageRole::Media => PictureType::Media,
        ImageRole::CoverFront => PictureType::CoverFront,
    }
}
