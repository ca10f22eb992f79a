use std::fmt;
use std::path::PathBuf;

/// Where a rendered transcript ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputDestination::File(path) => write!(f, "{}", path.display()),
            OutputDestination::Stdout => f.write_str("standard output"),
        }
    }
}
