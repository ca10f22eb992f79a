use std::path::{Path, PathBuf};

use thiserror::Error;

use super::transcript::Transcription;
use crate::audio::domain::audio_reader::AudioDecodeError;
use crate::shared::model_resolver::ModelResolveError;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("failed to resolve speech model: {0}")]
    ModelResolve(#[from] ModelResolveError),
    #[error("failed to load speech model {path}: {message}")]
    ModelLoad { path: PathBuf, message: String },
    #[error("failed to decode audio: {0}")]
    Decode(#[source] AudioDecodeError),
    #[error("no audio track found in {0}")]
    NoAudioTrack(PathBuf),
    #[error("speech inference failed: {0}")]
    Inference(String),
}

/// Domain interface for turning an audio file into timed text.
pub trait TranscriptionEngine {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcription, TranscriptionError>;
}
