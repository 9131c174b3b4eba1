//! Error types for slnmerge
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for slnmerge operations
pub type SlnResult<T> = Result<T, SlnError>;

/// Main error type for slnmerge operations
#[derive(Error, Debug)]
pub enum SlnError {
    /// Solution file could not be read
    #[error("failed to read solution {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line inside a structural block does not have the expected shape
    #[error("malformed entry in {file}:{line}: {message}")]
    Malformed {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// A block was opened but never closed
    #[error("unterminated {block} block in {file}:{line} - missing '{terminator}'")]
    UnterminatedBlock {
        file: PathBuf,
        line: usize,
        block: &'static str,
        terminator: &'static str,
    },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Merge was asked to combine zero solutions
    #[error("no solutions to merge")]
    NoSolutions,

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlnError {
    /// True for the errors raised while turning a file into a `Solution`.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            SlnError::Read { .. }
                | SlnError::Malformed { .. }
                | SlnError::UnterminatedBlock { .. }
        )
    }
}

impl From<FsError> for SlnError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::DirectoryNotFound(path) => SlnError::DirectoryNotFound { path },
            FsError::NotFound(path) => SlnError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
            FsError::PermissionDenied(path) => SlnError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )),
            FsError::Io(e) => SlnError::Io(e),
        }
    }
}
