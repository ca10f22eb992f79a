use crate::audio::domain::audio_segment::AudioSegment;

use super::transcript::TranscriptSegment;
use super::transcription_engine::TranscriptionError;

/// Domain interface for speech-to-text inference on decoded audio.
///
/// Implementations run a single blocking inference pass and return
/// segment-level timestamps ordered by start time.
pub trait SpeechRecognizer {
    fn recognize(&self, audio: &AudioSegment)
        -> Result<Vec<TranscriptSegment>, TranscriptionError>;
}
