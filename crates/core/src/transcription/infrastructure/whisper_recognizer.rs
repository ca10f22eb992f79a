use std::path::Path;

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::constants::{DEFAULT_MAX_THREADS, WHISPER_SAMPLE_RATE};
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript::TranscriptSegment;
use crate::transcription::domain::transcription_engine::TranscriptionError;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Produces segment-level timestamps. The model is loaded once in
/// [`WhisperRecognizer::load`] and reused for every call.
pub struct WhisperRecognizer {
    context: WhisperContext,
    language: Option<String>,
    threads: i32,
}

impl WhisperRecognizer {
    pub fn load(
        model_path: &Path,
        language: Option<String>,
        threads: Option<u32>,
    ) -> Result<Self, TranscriptionError> {
        let load_err = |message: String| TranscriptionError::ModelLoad {
            path: model_path.to_path_buf(),
            message,
        };

        if !model_path.exists() {
            return Err(load_err("model file not found".to_string()));
        }
        let path_str = model_path
            .to_str()
            .ok_or_else(|| load_err("model path is not valid UTF-8".to_string()))?;

        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|e| load_err(e.to_string()))?;

        Ok(Self {
            context,
            language,
            threads: resolve_threads(threads),
        })
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn recognize(
        &self,
        audio: &AudioSegment,
    ) -> Result<Vec<TranscriptSegment>, TranscriptionError> {
        if audio.sample_rate() != WHISPER_SAMPLE_RATE {
            return Err(TranscriptionError::Inference(format!(
                "expected {WHISPER_SAMPLE_RATE} Hz audio, got {} Hz",
                audio.sample_rate()
            )));
        }

        let mut state = self
            .context
            .create_state()
            .map_err(|e| TranscriptionError::Inference(format!("failed to create state: {e}")))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        // None lets whisper.cpp detect the spoken language.
        params.set_language(self.language.as_deref());
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(self.threads);

        state
            .full(params, audio.samples())
            .map_err(|e| TranscriptionError::Inference(e.to_string()))?;

        let num_segments = state.full_n_segments();
        let mut segments = Vec::with_capacity(num_segments.max(0) as usize);

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let text = segment.to_str_lossy().map_err(|e| {
                TranscriptionError::Inference(format!("unreadable segment {seg_idx}: {e}"))
            })?;

            // Segment timestamps are in centiseconds (10ms units)
            let start = segment.start_timestamp() as f64 / 100.0;
            let end = segment.end_timestamp() as f64 / 100.0;

            segments.push(TranscriptSegment::new(start, end.max(start), text.into_owned()));
        }

        Ok(segments)
    }
}

fn resolve_threads(configured: Option<u32>) -> i32 {
    match configured {
        Some(n) if n > 0 => i32::try_from(n).unwrap_or(i32::MAX),
        _ => num_cpus().min(DEFAULT_MAX_THREADS) as i32,
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
