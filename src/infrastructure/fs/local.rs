//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::walk::{walk_entries, EntryKind};
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::path;

/// Local file system implementation
///
/// Provides atomic writes, recursive tree copy and lazy directory walks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| with_path(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| with_path(e, &parent))?;

        // Temp file in the same directory so the rename stays on one volume
        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| with_path(e, &parent))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| with_path(e, path))?;
        temp.persist(path).map_err(|e| with_path(e.error, path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| with_path(e, path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| with_path(e, path))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(source = %source.display(), destination = %destination.display()))]
    fn copy_tree(&self, source: &Path, destination: &Path) -> FsResult<usize> {
        for dir in [source, destination] {
            if !dir.is_dir() {
                return Err(FsError::DirectoryNotFound(dir.to_path_buf()));
            }
        }

        let source = path::absolute(source).map_err(|e| with_path(e, source))?;
        let destination = path::absolute(destination).map_err(|e| with_path(e, destination))?;
        if source == destination {
            return Ok(0);
        }

        // Destination nested inside source must not be copied into itself
        let nested = destination.starts_with(&source).then(|| destination.clone());
        let outside_destination = |entry: &Path| match &nested {
            Some(skip) => !entry.starts_with(skip),
            None => true,
        };
        let target_of =
            |entry: &Path| path::right_part_after(entry, &source).map(|rel| destination.join(rel));

        for dir in walk_entries(&source, EntryKind::Dir).filter(|d| outside_destination(d)) {
            if let Some(target) = target_of(&dir) {
                std::fs::create_dir_all(&target).map_err(|e| with_path(e, &target))?;
            }
        }

        let mut copied = 0;
        for file in walk_entries(&source, EntryKind::File).filter(|f| outside_destination(f)) {
            let Some(target) = target_of(&file) else {
                continue;
            };
            ensure_parent(&target)?;
            std::fs::copy(&file, &target).map_err(|e| with_path(e, &file))?;
            copied += 1;
        }

        for link in walk_entries(&source, EntryKind::Link).filter(|l| outside_destination(l)) {
            let Some(target) = target_of(&link) else {
                continue;
            };
            ensure_parent(&target)?;
            copy_link(&link, &target)?;
            copied += 1;
        }

        debug!(files = copied, "copied tree");
        Ok(copied)
    }

    fn walk_files<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        Box::new(walk_entries(root, EntryKind::File))
    }

    fn walk_dirs<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        Box::new(walk_entries(root, EntryKind::Dir))
    }
}

fn ensure_parent(target: &Path) -> FsResult<()> {
    match target.parent() {
        Some(parent) => std::fs::create_dir_all(parent).map_err(|e| with_path(e, parent)),
        None => Ok(()),
    }
}

/// Recreate `link` at `target` pointing where the original points.
///
/// Relative link targets are kept as written, so they resolve inside the
/// copied tree.
#[cfg(unix)]
fn copy_link(link: &Path, target: &Path) -> FsResult<()> {
    let points_to = std::fs::read_link(link).map_err(|e| with_path(e, link))?;
    if target.symlink_metadata().is_ok() {
        std::fs::remove_file(target).map_err(|e| with_path(e, target))?;
    }
    std::os::unix::fs::symlink(&points_to, target).map_err(|e| with_path(e, target))
}

/// Without portable symlink creation, links to files are copied as files and
/// links to directories are skipped.
#[cfg(not(unix))]
fn copy_link(link: &Path, target: &Path) -> FsResult<()> {
    if link.is_dir() {
        debug!(link = %link.display(), "skipping directory link");
        return Ok(());
    }
    std::fs::copy(link, target)
        .map(|_| ())
        .map_err(|e| with_path(e, link))
}

fn with_path(err: std::io::Error, path: &Path) -> FsError {
    match err.kind() {
        std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
        _ => FsError::Io(err),
    }
}
