/// Base URL of the whisper.cpp ggml model repository.
pub const WHISPER_MODEL_BASE_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Name of the per-user directory for cached models and settings.
pub const APP_DIR_NAME: &str = "YT Transcribe";

/// Prefix of the intermediate audio file written to the temp directory.
pub const TEMP_AUDIO_PREFIX: &str = "youtube_audio_";

pub const AUDIO_CODEC: &str = "mp3";
pub const AUDIO_QUALITY: &str = "192K";
pub const AUDIO_FORMAT_SELECTOR: &str = "bestaudio/best";

pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Max inference threads when none are configured.
pub const DEFAULT_MAX_THREADS: usize = 4;
