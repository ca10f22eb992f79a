use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::fetch::domain::audio_asset::AudioAsset;
use crate::fetch::domain::audio_destination::{
    output_template, prepare_destination, resolve_downloaded_path,
};
use crate::fetch::domain::audio_fetcher::{AudioFetcher, FetchError};
use crate::shared::constants::{AUDIO_CODEC, AUDIO_FORMAT_SELECTOR, AUDIO_QUALITY, UNKNOWN_TITLE};

const YTDLP_CANDIDATES: &[&str] = &[
    "/opt/homebrew/bin/yt-dlp",
    "/usr/local/bin/yt-dlp",
    "/usr/bin/yt-dlp",
];

/// Downloads audio by running the `yt-dlp` executable.
///
/// yt-dlp picks the best audio stream, transcodes it to MP3 through ffmpeg
/// and prints the resource metadata as JSON on stdout. Its progress output
/// goes to our stderr.
pub struct YtDlpFetcher {
    program: PathBuf,
}

impl YtDlpFetcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `configured` if given, else a well-known install location, else
    /// whatever `yt-dlp` resolves to on `PATH`.
    pub fn locate(configured: Option<PathBuf>) -> Self {
        let program = configured.unwrap_or_else(|| {
            YTDLP_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|p| p.exists())
                .unwrap_or_else(|| PathBuf::from("yt-dlp"))
        });
        Self::new(program)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn build_args(url: &str, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--no-playlist",
            "-f",
            AUDIO_FORMAT_SELECTOR,
            "--extract-audio",
            "--audio-format",
            AUDIO_CODEC,
            "--audio-quality",
            AUDIO_QUALITY,
            "--no-simulate",
            "--dump-single-json",
            "--progress",
            "-o",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(output_template(output));
        args.push(OsString::from("--"));
        args.push(OsString::from(url));
        args
    }
}

impl AudioFetcher for YtDlpFetcher {
    fn fetch(&self, url: &str, destination: Option<&Path>) -> Result<AudioAsset, FetchError> {
        let requested = prepare_destination(url, destination)?;
        let args = Self::build_args(url, &requested);
        log::debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                let program = self.program.display().to_string();
                if e.kind() == ErrorKind::NotFound {
                    FetchError::ToolNotFound(program)
                } else {
                    FetchError::Spawn { program, source: e }
                }
            })?;

        if !output.status.success() {
            return Err(FetchError::ExtractorFailed {
                url: url.to_string(),
                status: output.status,
            });
        }

        let title = parse_title(&output.stdout)?;
        let file_path = resolve_downloaded_path(&requested);
        Ok(AudioAsset::new(file_path, title))
    }
}

/// Read the title from yt-dlp's JSON dump, defaulting when it is missing.
fn parse_title(stdout: &[u8]) -> Result<String, FetchError> {
    let text = String::from_utf8_lossy(stdout);
    let json_line = text
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    let json: serde_json::Value = serde_json::from_str(json_line)?;
    Ok(json["title"]
        .as_str()
        .unwrap_or(UNKNOWN_TITLE)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title() {
        let stdout = br#"{"id": "abc", "title": "Q&A: Live!", "duration": 61.0}"#;
        assert_eq!(parse_title(stdout).unwrap(), "Q&A: Live!");
    }

    #[test]
    fn test_parse_title_missing_defaults() {
        assert_eq!(parse_title(br#"{"id": "abc"}"#).unwrap(), UNKNOWN_TITLE);
        assert_eq!(parse_title(br#"{"title": null}"#).unwrap(), UNKNOWN_TITLE);
    }

    #[test]
    fn test_parse_title_uses_last_line() {
        let stdout = b"[info] something chatty\n{\"title\": \"Real\"}\n\n";
        assert_eq!(parse_title(stdout).unwrap(), "Real");
    }

    #[test]
    fn test_parse_title_invalid_json() {
        assert!(matches!(
            parse_title(b"ERROR: not json"),
            Err(FetchError::Metadata(_))
        ));
        assert!(matches!(parse_title(b""), Err(FetchError::Metadata(_))));
    }

    #[test]
    fn test_build_args_requests_mp3_audio() {
        let args = YtDlpFetcher::build_args(
            "https://www.youtube.com/watch?v=abc",
            Path::new("/tmp/youtube_audio_abc"),
        );
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
        assert_eq!(args[pos("-f") + 1], "bestaudio/best");
        assert_eq!(args[pos("--audio-format") + 1], "mp3");
        assert_eq!(args[pos("--audio-quality") + 1], "192K");
        assert_eq!(args[pos("--extract-audio") + 1], "--audio-format");
        assert_eq!(args[pos("-o") + 1], "/tmp/youtube_audio_abc.%(ext)s");
        assert_eq!(args.last().unwrap(), "https://www.youtube.com/watch?v=abc");
        assert_eq!(args[args.len() - 2], "--");
    }

    #[test]
    fn test_build_args_escapes_percent_in_audio_output() {
        let args = YtDlpFetcher::build_args(
            "https://www.youtube.com/watch?v=abc",
            Path::new("audio/50% off"),
        );
        let pos = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[pos + 1], OsString::from("audio/50%% off.%(ext)s"));
    }

    #[test]
    fn test_locate_prefers_configured_path() {
        let fetcher = YtDlpFetcher::locate(Some(PathBuf::from("/opt/tools/yt-dlp")));
        assert_eq!(fetcher.program(), Path::new("/opt/tools/yt-dlp"));
    }

    #[test]
    fn test_missing_binary_is_tool_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let fetcher = YtDlpFetcher::new(tmp.path().join("no-such-yt-dlp"));
        let err = fetcher
            .fetch(
                "https://www.youtube.com/watch?v=abc",
                Some(&tmp.path().join("audio")),
            )
            .unwrap_err();
        assert!(matches!(err, FetchError::ToolNotFound(_)), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_extractor_is_reported() {
        let fetcher = YtDlpFetcher::new("false");
        let tmp = tempfile::TempDir::new().unwrap();
        let err = fetcher
            .fetch("https://example.com/watch?v=x", Some(&tmp.path().join("a")))
            .unwrap_err();
        assert!(matches!(err, FetchError::ExtractorFailed { .. }), "got {err:?}");
    }

    #[test]
    #[ignore] // Requires network access and yt-dlp
    fn test_fetch_real_video() {
        let tmp = tempfile::TempDir::new().unwrap();
        let fetcher = YtDlpFetcher::locate(None);
        let asset = fetcher
            .fetch(
                "https://www.youtube.com/watch?v=jNQXAC9IVRw",
                Some(&tmp.path().join("zoo")),
            )
            .unwrap();
        assert!(asset.file_path.exists());
        assert!(!asset.source_title.is_empty());
    }
}
