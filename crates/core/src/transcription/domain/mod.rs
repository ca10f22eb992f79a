pub mod speech_recognizer;
pub mod transcript;
pub mod transcription_engine;
