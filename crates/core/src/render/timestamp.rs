//! Subtitle timestamp formatting shared by SRT and WebVTT.

/// Character between whole seconds and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalMarker {
    /// SRT style: `00:00:01,250`
    Comma,
    /// WebVTT style: `00:00:01.250`
    Period,
}

impl DecimalMarker {
    fn as_char(self) -> char {
        match self {
            DecimalMarker::Comma => ',',
            DecimalMarker::Period => '.',
        }
    }
}

/// Format seconds as `HH:MM:SS<marker>mmm`, always including hours.
///
/// Input is rounded to the nearest millisecond; negative values clamp to zero.
pub fn format_timestamp(seconds: f64, marker: DecimalMarker) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!(
        "{hours:02}:{minutes:02}:{secs:02}{}{millis:03}",
        marker.as_char()
    )
}
