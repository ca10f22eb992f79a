mod settings;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use yt_transcribe_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use yt_transcribe_core::config::{ModelSize, OutputFormat, RunConfig};
use yt_transcribe_core::error::TranscribeError;
use yt_transcribe_core::fetch::infrastructure::ytdlp_fetcher::YtDlpFetcher;
use yt_transcribe_core::pipeline::transcribe_video_use_case::TranscribeVideoUseCase;
use yt_transcribe_core::transcription::infrastructure::whisper_engine::WhisperEngine;

use crate::settings::Settings;

/// Transcribe the audio track of an online video.
#[derive(Parser, Debug)]
#[command(name = "yt-transcribe", version)]
struct Cli {
    /// URL of the video.
    url: String,

    /// Whisper model size: tiny, base, small, medium, large [default: base].
    #[arg(long)]
    model: Option<ModelSize>,

    /// Output format: txt, srt, vtt [default: txt].
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Transcript path (default: <video title>.<format>).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Keep the downloaded audio file.
    #[arg(long)]
    keep_audio: bool,

    /// Where to save the audio file (implies keeping it).
    #[arg(long)]
    audio_output: Option<PathBuf>,

    /// Language hint for the model, e.g. "en" (default: auto-detect).
    #[arg(long)]
    language: Option<String>,

    /// Number of inference threads.
    #[arg(long)]
    threads: Option<u32>,
}

impl Cli {
    fn into_run_config(self, settings: &Settings) -> RunConfig {
        RunConfig {
            url: self.url,
            model_size: self.model.unwrap_or(settings.model),
            output_format: self.format.unwrap_or(settings.format),
            output_path: self.output,
            keep_audio: self.keep_audio,
            audio_output_path: self.audio_output,
            language: self.language.or_else(|| settings.language.clone()),
            threads: self.threads.or(settings.threads),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), TranscribeError> {
    let cli = Cli::parse();
    let settings = Settings::load();
    let config = cli.into_run_config(&settings);

    let fetcher = YtDlpFetcher::locate(settings.ytdlp_path.clone());
    log::debug!("Using media extractor {}", fetcher.program().display());

    let engine = WhisperEngine::from_config(&config, Box::new(FfmpegAudioReader))
        .with_models_dir(settings.models_dir.clone())
        .with_progress(Arc::new(download_progress));

    let use_case = TranscribeVideoUseCase::new(Box::new(fetcher), Box::new(engine));
    let outcome = use_case.run(&config)?;

    log::info!(
        "Transcribed \"{}\" ({} segments) to {}",
        outcome.title,
        outcome.segment_count,
        outcome.destination
    );
    if let Some(audio) = outcome.audio_path {
        log::info!("Audio kept at {}", audio.display());
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading whisper model... {pct}%");
        if downloaded >= total {
            eprintln!();
        }
    } else {
        eprint!("\rDownloading whisper model... {downloaded} bytes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    const URL: &str = "https://www.youtube.com/watch?v=abc123";

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("yt-transcribe").chain(args.iter().copied()))
    }

    #[rstest]
    fn test_accepts_every_model_and_format(
        #[values("tiny", "base", "small", "medium", "large")] model: &str,
        #[values("txt", "srt", "vtt")] format: &str,
    ) {
        let cli = parse(&[URL, "--model", model, "--format", format]).unwrap();
        let config = cli.into_run_config(&Settings::default());
        assert_eq!(config.model_size.to_string(), model);
        assert_eq!(config.output_format.to_string(), format);
    }

    #[rstest]
    #[case::unknown_model(&["--model", "huge"])]
    #[case::uppercase_model(&["--model", "Base"])]
    #[case::unknown_format(&["--format", "json"])]
    #[case::empty_format(&["--format", ""])]
    fn test_rejects_invalid_choices(#[case] extra: &[&str]) {
        let mut args = vec![URL];
        args.extend_from_slice(extra);
        let err = parse(&args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_url_is_usage_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[URL]).unwrap().into_run_config(&Settings::default());
        assert_eq!(config, RunConfig::new(URL));
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            URL,
            "--model",
            "small",
            "--format",
            "srt",
            "--output",
            "subs/talk.srt",
            "--keep-audio",
            "--audio-output",
            "audio/talk",
            "--language",
            "en",
            "--threads",
            "2",
        ])
        .unwrap();
        let config = cli.into_run_config(&Settings::default());
        assert_eq!(config.model_size, ModelSize::Small);
        assert_eq!(config.output_format, OutputFormat::Srt);
        assert_eq!(config.output_path, Some(PathBuf::from("subs/talk.srt")));
        assert!(config.keep_audio);
        assert_eq!(config.audio_output_path, Some(PathBuf::from("audio/talk")));
        assert_eq!(config.language.as_deref(), Some("en"));
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_settings_fill_unset_flags() {
        let settings = Settings {
            model: ModelSize::Medium,
            format: OutputFormat::Vtt,
            language: Some("fr".to_string()),
            threads: Some(6),
            ..Settings::default()
        };
        let config = parse(&[URL, "--format", "txt"])
            .unwrap()
            .into_run_config(&settings);
        assert_eq!(config.model_size, ModelSize::Medium);
        assert_eq!(config.output_format, OutputFormat::Txt);
        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(config.threads, Some(6));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
