pub mod whisper_engine;
pub mod whisper_recognizer;
