use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UsageError;
use crate::shared::constants::WHISPER_MODEL_BASE_URL;

/// Whisper model size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    /// Fastest, least accurate (~75 MB).
    Tiny,
    /// Good balance of speed and accuracy (~142 MB).
    #[default]
    Base,
    /// Better accuracy, slower (~466 MB).
    Small,
    /// High accuracy (~1.5 GB).
    Medium,
    /// Best accuracy, slowest (~2.9 GB).
    Large,
}

impl ModelSize {
    pub const ALL: &[ModelSize] = &[
        ModelSize::Tiny,
        ModelSize::Base,
        ModelSize::Small,
        ModelSize::Medium,
        ModelSize::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }

    /// ggml model filename in the whisper.cpp model repository.
    pub fn filename(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::Large => "ggml-large-v3.bin",
        }
    }

    pub fn download_url(&self) -> String {
        format!("{WHISPER_MODEL_BASE_URL}/{}", self.filename())
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSize::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UsageError::InvalidModelSize(s.to_string()))
    }
}
