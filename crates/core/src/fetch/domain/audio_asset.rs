use std::path::{Path, PathBuf};

/// A downloaded audio file and the title of the resource it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub file_path: PathBuf,
    pub source_title: String,
}

impl AudioAsset {
    pub fn new(file_path: impl Into<PathBuf>, source_title: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            source_title: source_title.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}
