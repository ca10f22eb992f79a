use thiserror::Error;

use crate::fetch::domain::audio_fetcher::FetchError;
use crate::output::transcript_writer::FileSystemError;
use crate::transcription::domain::transcription_engine::TranscriptionError;

/// Any failure that aborts a run.
#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}
