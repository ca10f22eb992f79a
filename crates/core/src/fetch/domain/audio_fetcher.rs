use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

use super::audio_asset::AudioAsset;
use crate::output::transcript_writer::FileSystemError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("media extractor not found: {0}")]
    ToolNotFound(String),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("media extraction failed for {url} ({status})")]
    ExtractorFailed { url: String, status: ExitStatus },
    #[error("invalid metadata from media extractor: {0}")]
    Metadata(#[from] serde_json::Error),
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}

/// Domain interface for downloading the audio track of a remote resource.
pub trait AudioFetcher {
    /// Download `url` as audio. With no `destination`, a path in the system
    /// temp directory is derived from the URL.
    fn fetch(&self, url: &str, destination: Option<&Path>) -> Result<AudioAsset, FetchError>;
}
