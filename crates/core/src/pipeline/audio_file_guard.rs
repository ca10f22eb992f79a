use std::fs;
use std::path::{Path, PathBuf};

/// Removes the intermediate audio file when dropped, unless retained.
///
/// Acquired right after the download so every exit path (including a failed
/// transcription) cleans up. A failed removal is only logged.
#[derive(Debug)]
pub struct AudioFileGuard {
    path: PathBuf,
    retain: bool,
}

impl AudioFileGuard {
    pub fn new(path: impl Into<PathBuf>, retain: bool) -> Self {
        Self {
            path: path.into(),
            retain,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_retained(&self) -> bool {
        self.retain
    }
}

impl Drop for AudioFileGuard {
    fn drop(&mut self) {
        if self.retain {
            log::info!("Keeping audio file: {}", self.path.display());
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => log::info!("Deleted temporary audio file: {}", self.path.display()),
            Err(e) => log::warn!(
                "Could not delete temporary audio file {}: {e}",
                self.path.display()
            ),
        }
    }
}
