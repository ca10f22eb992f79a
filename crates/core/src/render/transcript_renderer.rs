use std::fmt::Write;

use super::timestamp::{format_timestamp, DecimalMarker};
use crate::transcription::domain::transcript::TranscriptSegment;

/// Turns an ordered segment list into one textual transcript.
///
/// Rendering is pure: the same segments always produce the same bytes.
pub trait TranscriptRenderer {
    fn render(&self, segments: &[TranscriptSegment]) -> String;
}

/// Plain text: each segment's text followed by a single space.
pub struct TxtRenderer;

impl TranscriptRenderer for TxtRenderer {
    fn render(&self, segments: &[TranscriptSegment]) -> String {
        let mut output = String::new();
        for segment in segments {
            output.push_str(&segment.text);
            output.push(' ');
        }
        output
    }
}

/// SubRip: numbered blocks with `HH:MM:SS,mmm` ranges.
pub struct SrtRenderer;

impl TranscriptRenderer for SrtRenderer {
    fn render(&self, segments: &[TranscriptSegment]) -> String {
        let mut output = String::new();
        for (i, segment) in segments.iter().enumerate() {
            let _ = write!(
                output,
                "{}\n{}\n{}\n\n",
                i + 1,
                time_range(segment, DecimalMarker::Comma),
                segment.text
            );
        }
        output
    }
}

/// WebVTT: `WEBVTT` header, then blocks with `HH:MM:SS.mmm` ranges.
pub struct VttRenderer;

impl TranscriptRenderer for VttRenderer {
    fn render(&self, segments: &[TranscriptSegment]) -> String {
        let mut output = String::from("WEBVTT\n\n");
        for segment in segments {
            let _ = write!(
                output,
                "{}\n{}\n\n",
                time_range(segment, DecimalMarker::Period),
                segment.text
            );
        }
        output
    }
}

fn time_range(segment: &TranscriptSegment, marker: DecimalMarker) -> String {
    format!(
        "{} --> {}",
        format_timestamp(segment.start, marker),
        format_timestamp(segment.end, marker)
    )
}
