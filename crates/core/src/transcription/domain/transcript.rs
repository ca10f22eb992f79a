/// A single timed span of recognised speech.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds, never before `start`.
    pub end: f64,
    /// Text exactly as the recognizer produced it, including leading spaces.
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Details about an engine run. Only used for logging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranscriptionInfo {
    /// Language the model was asked to use, `None` when auto-detected.
    pub language: Option<String>,
    pub audio_duration: f64,
    pub segment_count: usize,
    pub processing_time: f64,
}

/// Output of one engine run: segments ordered by start time.
///
/// Produced once per run and moved into the formatter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcription {
    pub segments: Vec<TranscriptSegment>,
    pub info: TranscriptionInfo,
}

impl Transcription {
    pub fn new(segments: Vec<TranscriptSegment>, info: TranscriptionInfo) -> Self {
        Self { segments, info }
    }
}
