pub mod model_size;
pub mod output_format;
pub mod run_config;

use thiserror::Error;

pub use model_size::ModelSize;
pub use output_format::OutputFormat;
pub use run_config::RunConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("invalid model size '{0}' (expected one of: tiny, base, small, medium, large)")]
    InvalidModelSize(String),
    #[error("invalid output format '{0}' (expected one of: txt, srt, vtt)")]
    InvalidOutputFormat(String),
}
