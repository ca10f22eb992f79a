pub mod audio_file_guard;
pub mod transcribe_video_use_case;
