use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::audio::domain::audio_reader::{AudioDecodeError, AudioReader};
use crate::config::{ModelSize, RunConfig};
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::shared::model_resolver::{self, ProgressFn};
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript::{Transcription, TranscriptionInfo};
use crate::transcription::domain::transcription_engine::{
    TranscriptionEngine, TranscriptionError,
};
use crate::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

/// Shared download progress callback: `(bytes_downloaded, total_bytes)`.
pub type SharedProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Transcription engine backed by whisper.cpp.
///
/// Each call resolves the ggml model for the configured size (downloading it
/// on first use), decodes the audio file to 16 kHz mono and runs one
/// inference pass.
pub struct WhisperEngine {
    model_size: ModelSize,
    reader: Box<dyn AudioReader>,
    language: Option<String>,
    threads: Option<u32>,
    models_dir: Option<PathBuf>,
    progress: Option<SharedProgressFn>,
}

impl WhisperEngine {
    pub fn new(model_size: ModelSize, reader: Box<dyn AudioReader>) -> Self {
        Self {
            model_size,
            reader,
            language: None,
            threads: None,
            models_dir: None,
            progress: None,
        }
    }

    pub fn from_config(config: &RunConfig, reader: Box<dyn AudioReader>) -> Self {
        Self::new(config.model_size, reader)
            .with_language(config.language.clone())
            .with_threads(config.threads)
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn with_threads(mut self, threads: Option<u32>) -> Self {
        self.threads = threads;
        self
    }

    /// Extra directory searched for model files before downloading.
    pub fn with_models_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.models_dir = dir;
        self
    }

    pub fn with_progress(mut self, progress: SharedProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn model_size(&self) -> ModelSize {
        self.model_size
    }

    fn load_recognizer(&self) -> Result<WhisperRecognizer, TranscriptionError> {
        let progress: Option<ProgressFn> = self.progress.clone().map(|cb| {
            let boxed: ProgressFn = Box::new(move |downloaded, total| cb(downloaded, total));
            boxed
        });
        let model_path = model_resolver::resolve_whisper_model(
            self.model_size,
            self.models_dir.as_deref(),
            progress,
        )?;
        log::debug!("Loading model {}", model_path.display());
        WhisperRecognizer::load(&model_path, self.language.clone(), self.threads)
    }
}

impl TranscriptionEngine for WhisperEngine {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcription, TranscriptionError> {
        let recognizer = self.load_recognizer()?;
        run_recognizer(
            self.reader.as_ref(),
            &recognizer,
            audio_path,
            self.language.clone(),
        )
    }
}

/// Decode `audio_path` and run `recognizer` over it once.
pub fn run_recognizer(
    reader: &dyn AudioReader,
    recognizer: &dyn SpeechRecognizer,
    audio_path: &Path,
    language: Option<String>,
) -> Result<Transcription, TranscriptionError> {
    let audio = reader
        .read_audio(audio_path, WHISPER_SAMPLE_RATE)
        .map_err(|e| match e {
            AudioDecodeError::NoAudioStream(path) => TranscriptionError::NoAudioTrack(path),
            other => TranscriptionError::Decode(other),
        })?;

    let started = Instant::now();
    let segments = recognizer.recognize(&audio)?;

    let info = TranscriptionInfo {
        language,
        audio_duration: audio.duration(),
        segment_count: segments.len(),
        processing_time: started.elapsed().as_secs_f64(),
    };
    log::debug!(
        "Transcribed {:.1}s of audio into {} segments in {:.1}s (language: {})",
        info.audio_duration,
        info.segment_count,
        info.processing_time,
        info.language.as_deref().unwrap_or("auto"),
    );

    Ok(Transcription::new(segments, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::transcription::domain::transcript::TranscriptSegment;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    // ─── Stubs ───

    struct StubReader {
        audio: Option<AudioSegment>,
        fail: bool,
    }

    impl AudioReader for StubReader {
        fn read_audio(
            &self,
            path: &Path,
            target_sample_rate: u32,
        ) -> Result<AudioSegment, AudioDecodeError> {
            assert_eq!(target_sample_rate, WHISPER_SAMPLE_RATE);
            if self.fail {
                return Err(AudioDecodeError::Decode {
                    path: path.to_path_buf(),
                    message: "corrupt stream".to_string(),
                });
            }
            self.audio
                .clone()
                .ok_or_else(|| AudioDecodeError::NoAudioStream(path.to_path_buf()))
        }
    }

    struct StubRecognizer {
        segments: Vec<TranscriptSegment>,
        calls: Cell<usize>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn recognize(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<TranscriptSegment>, TranscriptionError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.segments.clone())
        }
    }

    fn recognizer() -> StubRecognizer {
        StubRecognizer {
            segments: vec![
                TranscriptSegment::new(0.0, 1.5, " Hello"),
                TranscriptSegment::new(1.5, 3.0, " world"),
            ],
            calls: Cell::new(0),
        }
    }

    fn two_seconds() -> AudioSegment {
        AudioSegment::new(vec![0.0; 2 * WHISPER_SAMPLE_RATE as usize], WHISPER_SAMPLE_RATE)
    }

    #[test]
    fn test_run_recognizer_returns_segments_and_info() {
        let reader = StubReader {
            audio: Some(two_seconds()),
            fail: false,
        };
        let rec = recognizer();
        let result =
            run_recognizer(&reader, &rec, Path::new("a.mp3"), Some("en".to_string())).unwrap();

        assert_eq!(rec.calls.get(), 1);
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.segments[0].text, " Hello");
        assert_eq!(result.info.segment_count, 2);
        assert_eq!(result.info.language.as_deref(), Some("en"));
        assert_relative_eq!(result.info.audio_duration, 2.0);
    }

    #[test]
    fn test_run_recognizer_without_audio_track() {
        let reader = StubReader {
            audio: None,
            fail: false,
        };
        let rec = recognizer();
        let err = run_recognizer(&reader, &rec, Path::new("silent.mp4"), None).unwrap_err();
        assert!(
            matches!(err, TranscriptionError::NoAudioTrack(ref p) if p == Path::new("silent.mp4"))
        );
        assert_eq!(rec.calls.get(), 0);
    }

    #[test]
    fn test_run_recognizer_decode_failure() {
        let reader = StubReader {
            audio: None,
            fail: true,
        };
        let err = run_recognizer(&reader, &recognizer(), Path::new("bad.mp3"), None).unwrap_err();
        assert!(matches!(err, TranscriptionError::Decode(AudioDecodeError::Decode { .. })));
        assert!(err.to_string().contains("bad.mp3"));
    }

    #[test]
    fn test_builder_keeps_settings() {
        let config = RunConfig {
            model_size: ModelSize::Small,
            language: Some("de".to_string()),
            threads: Some(2),
            ..RunConfig::new("https://example.com/watch?v=x")
        };
        let engine = WhisperEngine::from_config(
            &config,
            Box::new(StubReader {
                audio: None,
                fail: false,
            }),
        );
        assert_eq!(engine.model_size(), ModelSize::Small);
        assert_eq!(engine.language.as_deref(), Some("de"));
        assert_eq!(engine.threads, Some(2));
    }
}
