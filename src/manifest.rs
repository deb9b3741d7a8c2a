//! Episode manifest: the ordered chapter list for one episode

use crate::chapters::ChapterDescriptor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory (relative to the manifest) used when neither manifest nor config name an output
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_EPISODE_FILE: &str = "episode.mp3";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Episode title written to the tag's TIT2 frame
    pub title: Option<String>,

    /// Directory holding segment audio and images, relative to the manifest
    pub input_dir: Option<PathBuf>,

    /// Combined episode path, relative to the manifest
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub chapters: Vec<ManifestChapter>,

    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestChapter {
    pub title: String,
    pub audio: PathBuf,
    pub image: PathBuf,
    pub url: String,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {:?}", path))?;

        let mut manifest = Self::parse(&content)
            .with_context(|| format!("Failed to parse manifest {:?}", path))?;
        manifest.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(manifest)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Directory segment and image paths are resolved against
    pub fn input_dir(&self) -> PathBuf {
        match &self.input_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        }
    }

    /// Chapter descriptors in manifest order.
    ///
    /// Segment paths are resolved against the input directory; image refs are
    /// left as written and resolved by the image store at build time.
    pub fn descriptors(&self) -> Vec<ChapterDescriptor> {
        let input_dir = self.input_dir();
        self.chapters
            .iter()
            .map(|chapter| ChapterDescriptor {
                title: chapter.title.clone(),
                image_ref: chapter.image.clone(),
                url: chapter.url.clone(),
                segment_ref: input_dir.join(&chapter.audio),
            })
            .collect()
    }

    /// Where the combined episode goes: CLI override, manifest, config dir, then `output/`
    pub fn output_path(&self, cli_override: Option<&Path>, config_dir: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(output) = &self.output {
            return self.base_dir.join(output);
        }
        match config_dir {
            Some(dir) => dir.join(DEFAULT_EPISODE_FILE),
            None => self
                .base_dir
                .join(DEFAULT_OUTPUT_DIR)
                .join(DEFAULT_EPISODE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const POEMS: &str = r#"
title = "Poems, episode 1"
input_dir = "chapters"

[[chapters]]
title = "The Walrus and the Carpenter"
audio = "walrus.mp3"
image = "walrus.jpg"
url = "https://www.poetryfoundation.org/poems/43914/the-walrus-and-the-carpenter-56d222cbc80a9"

[[chapters]]
title = "The Raven"
audio = "raven.mp3"
image = "raven.jpg"
url = "https://www.poetryfoundation.org/poems/48860/the-raven"
"#;

    #[test]
    fn test_load_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("episode.toml");
        std::fs::write(&path, POEMS).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.title.as_deref(), Some("Poems, episode 1"));

        let descriptors = manifest.descriptors();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].title, "The Walrus and the Carpenter");
        assert_eq!(
            descriptors[0].segment_ref,
            temp.path().join("chapters").join("walrus.mp3")
        );
        assert_eq!(descriptors[1].image_ref, PathBuf::from("raven.jpg"));
        assert_eq!(manifest.input_dir(), temp.path().join("chapters"));
    }

    #[test]
    fn test_output_path_precedence() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("episode.toml");
        std::fs::write(&path, POEMS).unwrap();
        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(
            manifest.output_path(None, None),
            temp.path().join("output").join("episode.mp3")
        );
        assert_eq!(
            manifest.output_path(None, Some(Path::new("/episodes"))),
            PathBuf::from("/episodes/episode.mp3")
        );
        assert_eq!(
            manifest.output_path(Some(Path::new("/tmp/ep1.mp3")), Some(Path::new("/episodes"))),
            PathBuf::from("/tmp/ep1.mp3")
        );

        let with_output = Manifest {
            output: Some(PathBuf::from("out/ep1.mp3")),
            ..Manifest::default()
        };
        assert_eq!(
            with_output.output_path(None, Some(Path::new("/episodes"))),
            PathBuf::from("out/ep1.mp3")
        );
    }

    #[test]
    fn test_empty_chapter_list_parses() {
        let manifest = Manifest::parse("title = \"Nothing yet\"\n").unwrap();
        assert!(manifest.chapters.is_empty());
        assert!(manifest.descriptors().is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Manifest::parse(
            r#"
[[chapters]]
title = "The Raven"
audio = "raven.mp3"
image = "raven.jpg"
link = "https://example.com"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_manifest() {
        let err = Manifest::load(Path::new("/nonexistent/episode.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
