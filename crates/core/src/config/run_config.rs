use std::path::{Path, PathBuf};

use super::{ModelSize, OutputFormat};
use crate::output::output_destination::OutputDestination;
use crate::shared::filename::{is_usable_file_stem, sanitize_title};

/// Everything one run needs, as resolved from the command line.
///
/// The transcript path may still be unknown here: without an explicit
/// `output_path` it depends on the resource title, which only the fetcher
/// learns. [`RunConfig::output_destination`] finishes that step.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub url: String,
    pub model_size: ModelSize,
    pub output_format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub keep_audio: bool,
    pub audio_output_path: Option<PathBuf>,
    /// Language hint for the model (ISO 639-1 code, e.g. "en").
    pub language: Option<String>,
    /// Inference thread count. `None` picks a default from the CPU count.
    pub threads: Option<u32>,
}

impl RunConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model_size: ModelSize::default(),
            output_format: OutputFormat::default(),
            output_path: None,
            keep_audio: false,
            audio_output_path: None,
            language: None,
            threads: None,
        }
    }

    /// Whether the downloaded audio should outlive the run.
    pub fn retains_audio(&self) -> bool {
        self.keep_audio || self.audio_output_path.is_some()
    }

    pub fn audio_destination(&self) -> Option<&Path> {
        self.audio_output_path.as_deref()
    }

    /// Resolve where the rendered transcript goes once the title is known.
    pub fn output_destination(&self, title: &str) -> OutputDestination {
        if let Some(path) = &self.output_path {
            return OutputDestination::File(path.clone());
        }

        let stem = sanitize_title(title);
        if !is_usable_file_stem(&stem) {
            return OutputDestination::Stdout;
        }
        OutputDestination::File(PathBuf::from(format!(
            "{stem}.{}",
            self.output_format.extension()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=abc123";

    #[test]
    fn test_new_uses_defaults() {
        let config = RunConfig::new(URL);
        assert_eq!(config.url, URL);
        assert_eq!(config.model_size, ModelSize::Base);
        assert_eq!(config.output_format, OutputFormat::Txt);
        assert!(config.output_path.is_none());
        assert!(!config.keep_audio);
        assert!(config.audio_output_path.is_none());
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let config = RunConfig {
            output_path: Some(PathBuf::from("out/transcript.srt")),
            ..RunConfig::new(URL)
        };
        assert_eq!(
            config.output_destination("Anything"),
            OutputDestination::File(PathBuf::from("out/transcript.srt"))
        );
    }

    #[test]
    fn test_derives_path_from_sanitized_title() {
        let config = RunConfig {
            output_format: OutputFormat::Vtt,
            ..RunConfig::new(URL)
        };
        assert_eq!(
            config.output_destination("Q&A: Live!"),
            OutputDestination::File(PathBuf::from("Q_A_ Live_.vtt"))
        );
    }

    #[test]
    fn test_empty_title_falls_back_to_stdout() {
        let config = RunConfig::new(URL);
        assert_eq!(config.output_destination(""), OutputDestination::Stdout);
    }

    #[test]
    fn test_retains_audio() {
        assert!(!RunConfig::new(URL).retains_audio());
        let keep = RunConfig {
            keep_audio: true,
            ..RunConfig::new(URL)
        };
        assert!(keep.retains_audio());
        let explicit = RunConfig {
            audio_output_path: Some(PathBuf::from("audio/talk")),
            ..RunConfig::new(URL)
        };
        assert!(explicit.retains_audio());
    }
}
