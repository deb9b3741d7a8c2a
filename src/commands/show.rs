use crate::chapters::format_ms;
use crate::tag::{read_chapters, TaggedChapters};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path, json: bool, quiet: bool) -> Result<()> {
    let chapters = read_chapters(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
    } else {
        print_pretty(&chapters, path, quiet);
    }

    Ok(())
}

fn print_pretty(tagged: &TaggedChapters, path: &Path, quiet: bool) {
    if !quiet {
        println!("{}", path.display().to_string().bold());
        println!("{}", "─".repeat(40));
    }

    print_field("Title", tagged.episode_title.as_deref());
    print_field("Contents", tagged.toc_title.as_deref());

    if tagged.chapters.is_empty() {
        println!("No chapter frames found");
        return;
    }

    for chapter in &tagged.chapters {
        println!();
        println!(
            "{} [{} - {}]",
            chapter.element_id.bold(),
            format_ms(chapter.start_ms),
            format_ms(chapter.end_ms)
        );
        print_field("Title", chapter.title.as_deref());
        print_field("URL", chapter.url.as_deref());
        if let Some(size) = chapter.image_bytes {
            print_field("Image", Some(&format!("embedded ({} bytes)", size)));
        }
    }

    if !tagged.is_consistent() {
        println!();
        println!(
            "{} table of contents lists {:?} but chapter frames are {:?}",
            "warning:".yellow().bold(),
            tagged.toc_child_ids,
            tagged
                .chapters
                .iter()
                .map(|c| c.element_id.as_str())
                .collect::<Vec<_>>()
        );
    }
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{:>12}: {}", label.cyan(), v);
    }
}
