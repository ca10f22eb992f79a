use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use yt_transcribe_core::config::{ModelSize, OutputFormat};
use yt_transcribe_core::shared::constants::APP_DIR_NAME;

/// Persistent defaults read from `settings.json` in the user config directory.
///
/// Every field is optional in the file; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelSize,
    pub format: OutputFormat,
    pub language: Option<String>,
    pub threads: Option<u32>,
    pub ytdlp_path: Option<PathBuf>,
    /// Directory searched for ggml model files before downloading.
    pub models_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: ModelSize::Base,
            format: OutputFormat::Txt,
            language: None,
            threads: None,
            ytdlp_path: None,
            models_dir: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing or malformed files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
