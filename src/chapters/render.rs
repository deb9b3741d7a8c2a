use super::model::{ChapterTree, SubFrame};
use crate::safety::format_size;

/// Render the tree as TOC -> chapters -> embedded frames
pub fn render_tree(tree: &ChapterTree) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} \"{}\" (top-level, ordered)\n",
        tree.toc.element_id, tree.toc.title.text
    ));

    let count = tree.chapters.len();
    for (i, chapter) in tree.chapters.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = if is_last { "    " } else { "│   " };

        output.push_str(&format!(
            "{}{} [{} - {}]\n",
            connector,
            chapter.element_id,
            format_ms(chapter.range.start_ms),
            format_ms(chapter.range.end_ms)
        ));

        let frames = chapter.sub_frames();
        for (j, frame) in frames.iter().enumerate() {
            let connector = if j == frames.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!(
                "{}{}{}\n",
                child_prefix,
                connector,
                describe_frame(frame)
            ));
        }
    }

    output
}

fn describe_frame(frame: &SubFrame<'_>) -> String {
    match frame {
        SubFrame::Title(title) => format!("title: {}", title.text),
        SubFrame::Image(image) => format!(
            "image: {}, {}",
            image.mime_type,
            format_size(image.data.len() as u64)
        ),
        SubFrame::Url(url) => format!("{}: {}", url.description, url.url),
    }
}

/// Format milliseconds as HH:MM:SS.mmm
pub fn format_ms(ms: u32) -> String {
    let millis = ms % 1000;
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::model::{
        ChapterNode, ChapterRange, ImageFrame, ImageRole, TitleFrame, TocNode, UrlFrame,
    };

    fn chapter(n: usize, start_ms: u32, end_ms: u32) -> ChapterNode {
        ChapterNode {
            element_id: format!("CH{}", n),
            range: ChapterRange { start_ms, end_ms },
            title: TitleFrame {
                text: format!("Poem {}", n),
            },
            image: ImageFrame {
                mime_type: "image/jpeg".to_string(),
                role: ImageRole::Media,
                data: vec![0; 2048],
            },
            url: UrlFrame {
                description: "chapter URL".to_string(),
                url: format!("https://example.com/{}", n),
            },
        }
    }

    #[test]
    fn test_render_tree() {
        let tree = ChapterTree {
            toc: TocNode {
                element_id: "TOC".to_string(),
                is_top_level: true,
                is_ordered: true,
                child_ids: vec!["CH1".to_string(), "CH2".to_string()],
                title: TitleFrame {
                    text: "Table of Contents".to_string(),
                },
            },
            chapters: vec![chapter(1, 1, 5000), chapter(2, 5001, 8000)],
        };

        let rendered = render_tree(&tree);
        assert!(rendered.starts_with("TOC \"Table of Contents\""));
        assert!(rendered.contains("├── CH1 [00:00:00.001 - 00:00:05.000]"));
        assert!(rendered.contains("└── CH2 [00:00:05.001 - 00:00:08.000]"));
        assert!(rendered.contains("│   ├── title: Poem 1"));
        assert!(rendered.contains("image: image/jpeg, 2 KB"));
        assert!(rendered.contains("    └── chapter URL: https://example.com/2"));
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0), "00:00:00.000");
        assert_eq!(format_ms(15000), "00:00:15.000");
        assert_eq!(format_ms(3_723_004), "01:02:03.004");
    }
}
