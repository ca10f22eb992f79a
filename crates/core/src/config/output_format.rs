use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UsageError;
use crate::render::transcript_renderer::{
    SrtRenderer, TranscriptRenderer, TxtRenderer, VttRenderer,
};
use crate::transcription::domain::transcript::TranscriptSegment;

/// Textual form a transcript is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, all segments joined on one line.
    #[default]
    Txt,
    /// SubRip subtitles.
    Srt,
    /// WebVTT subtitles.
    Vtt,
}

impl OutputFormat {
    pub const ALL: &[OutputFormat] = &[OutputFormat::Txt, OutputFormat::Srt, OutputFormat::Vtt];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
        }
    }

    pub fn renderer(&self) -> &'static dyn TranscriptRenderer {
        match self {
            OutputFormat::Txt => &TxtRenderer,
            OutputFormat::Srt => &SrtRenderer,
            OutputFormat::Vtt => &VttRenderer,
        }
    }

    pub fn render(&self, segments: &[TranscriptSegment]) -> String {
        self.renderer().render(segments)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|f| f.extension() == s)
            .ok_or_else(|| UsageError::InvalidOutputFormat(s.to_string()))
    }
}
