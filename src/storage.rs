//! Image byte loading for chapter artwork

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of the bytes behind a chapter's `image_ref`
pub trait ImageStore {
    fn read_bytes(&self, image_ref: &Path) -> io::Result<Vec<u8>>;
}

/// Reads images from disk, resolving relative refs against `base`
#[derive(Debug, Clone, Default)]
pub struct FsImageStore {
    base: Option<PathBuf>,
}

impl FsImageStore {
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, image_ref: &Path) -> PathBuf {
        match &self.base {
            Some(base) if image_ref.is_relative() => base.join(image_ref),
            _ => image_ref.to_path_buf(),
        }
    }
}

impl ImageStore for FsImageStore {
    fn read_bytes(&self, image_ref: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(image_ref))
    }
}
