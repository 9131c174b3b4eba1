//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the domain layer to read, write and copy solution trees
//! without depending on a concrete implementation.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Directory required by a tree operation does not exist
    DirectoryNotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

/// Path-less conversion. Implementations attach the offending path where
/// they know it; this is the fallback for errors without one.
impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::DirectoryNotFound(path) => {
                write!(f, "Directory \"{}\" does not exist", path.display())
            }
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

impl FsError {
    /// Flatten back into an `io::Error`, keeping the error kind.
    pub fn into_io(self) -> std::io::Error {
        let kind = match &self {
            FsError::NotFound(_) | FsError::DirectoryNotFound(_) => std::io::ErrorKind::NotFound,
            FsError::PermissionDenied(_) => std::io::ErrorKind::PermissionDenied,
            FsError::Io(err) => err.kind(),
        };
        match self {
            FsError::Io(err) => err,
            other => std::io::Error::new(kind, other.to_string()),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy every directory and file under `source` into `destination`.
    ///
    /// Both directories must exist. Existing destination files are
    /// overwritten. Returns the number of files copied.
    fn copy_tree(&self, source: &Path, destination: &Path) -> FsResult<usize>;

    /// Lazily enumerate files under `root` at every depth.
    ///
    /// Entries that cannot be accessed are skipped, so the sequence is not
    /// guaranteed to be complete under access-restricted trees.
    fn walk_files<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a>;

    /// Lazily enumerate directories under `root` at every depth (root excluded).
    ///
    /// Same skipping rule as [`FileSystem::walk_files`].
    fn walk_dirs<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a>;
}
