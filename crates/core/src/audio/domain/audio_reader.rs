use std::path::{Path, PathBuf};

use thiserror::Error;

use super::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum AudioDecodeError {
    #[error("no audio stream in {0}")]
    NoAudioStream(PathBuf),
    #[error("cannot open {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("cannot decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
}

/// Domain interface for decoding an audio file.
pub trait AudioReader {
    /// Decode the best audio stream to mono PCM at `target_sample_rate`.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, AudioDecodeError>;
}
