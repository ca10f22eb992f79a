pub mod timestamp;
pub mod transcript_renderer;
