use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::TranscribeError;
use crate::fetch::domain::audio_fetcher::AudioFetcher;
use crate::output::output_destination::OutputDestination;
use crate::output::transcript_writer::write_transcript;
use crate::pipeline::audio_file_guard::AudioFileGuard;
use crate::transcription::domain::transcription_engine::TranscriptionEngine;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub title: String,
    pub destination: OutputDestination,
    pub segment_count: usize,
    /// Audio file left on disk, if it was retained.
    pub audio_path: Option<PathBuf>,
}

/// Fetch → transcribe → render → write, then clean up the audio file.
pub struct TranscribeVideoUseCase {
    fetcher: Box<dyn AudioFetcher>,
    engine: Box<dyn TranscriptionEngine>,
}

impl TranscribeVideoUseCase {
    pub fn new(fetcher: Box<dyn AudioFetcher>, engine: Box<dyn TranscriptionEngine>) -> Self {
        Self { fetcher, engine }
    }

    pub fn run(&self, config: &RunConfig) -> Result<RunOutcome, TranscribeError> {
        log::info!("Downloading audio from: {}", config.url);
        let asset = self
            .fetcher
            .fetch(&config.url, config.audio_destination())?;
        log::info!("Audio downloaded to: {}", asset.path().display());

        let audio = AudioFileGuard::new(asset.path(), config.retains_audio());
        let destination = config.output_destination(&asset.source_title);

        log::info!("Transcribing audio using {} model...", config.model_size);
        let transcription = self.engine.transcribe(audio.path())?;
        log::debug!(
            "Detected {} segments over {:.1}s",
            transcription.info.segment_count,
            transcription.info.audio_duration
        );

        let segment_count = transcription.segments.len();
        let rendered = config.output_format.render(&transcription.segments);
        write_transcript(&destination, &rendered)?;
        if let OutputDestination::File(path) = &destination {
            log::info!("Transcription saved to: {}", path.display());
        }

        let audio_path = audio.is_retained().then(|| audio.path().to_path_buf());
        drop(audio);

        Ok(RunOutcome {
            title: asset.source_title,
            destination,
            segment_count,
            audio_path,
        })
    }
}
