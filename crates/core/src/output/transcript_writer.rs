use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::output_destination::OutputDestination;

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write transcript to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write transcript to standard output: {0}")]
    Stdout(#[source] io::Error),
}

/// Persist a rendered transcript.
///
/// Files are written as UTF-8 and silently replace existing content. The
/// parent directory of the target must already exist.
pub fn write_transcript(
    destination: &OutputDestination,
    content: &str,
) -> Result<(), FileSystemError> {
    match destination {
        OutputDestination::File(path) => write_file(path, content),
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            write_to(&mut stdout.lock(), content).map_err(FileSystemError::Stdout)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), FileSystemError> {
    fs::write(path, content.as_bytes()).map_err(|e| FileSystemError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_to(out: &mut dyn Write, content: &str) -> io::Result<()> {
    writeln!(out, "\nTranscription:")?;
    writeln!(out, "{content}")?;
    out.flush()
}
