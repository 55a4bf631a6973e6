use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for buildtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for buildtoc operations
#[derive(Debug)]
pub enum TocError {
    /// The input document could not be opened or read
    Read { path: PathBuf, source: io::Error },
    /// The generated table of contents could not be written
    Write { path: PathBuf, source: io::Error },
    /// Invalid arguments
    Config(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            TocError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Read { source, .. } | TocError::Write { source, .. } => Some(source),
            TocError::Config(_) => None,
        }
    }
}
