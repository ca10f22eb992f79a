//! Download the audio track of an online video and transcribe it to
//! plain text, SRT or WebVTT.
//!
//! Media extraction is delegated to `yt-dlp`, decoding to ffmpeg and speech
//! recognition to whisper.cpp.

pub mod audio;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod shared;
pub mod transcription;
