//! Lazy directory traversal

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    File,
    Dir,
    /// Symbolic link, whatever it points to. Links are never followed.
    Link,
}

/// Every entry of `kind` below `root`, at any depth, root excluded.
///
/// No ignore rules apply: hidden files and `.gitignore`d paths are yielded
/// too. Entries the walker fails to read (permission denied, vanished while
/// walking) are dropped by the `filter_map(Result::ok)` step.
pub(crate) fn walk_entries(root: &Path, kind: EntryKind) -> impl Iterator<Item = PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.depth() > 0)
        .filter(move |entry| kind_of(entry) == Some(kind))
        .map(DirEntry::into_path)
}

fn kind_of(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        Some(EntryKind::Link)
    } else if file_type.is_dir() {
        Some(EntryKind::Dir)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}
