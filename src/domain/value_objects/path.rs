//! Path helpers for solution locations
//!
//! Solution files always store locations with `\` separators, regardless of
//! the host platform. Everything in this module is pure string/component
//! manipulation; nothing here touches the file system.

use std::path::{Component, Path, PathBuf};

/// Separator used inside solution files
pub const SLN_SEPARATOR: char = '\\';

/// Split a path into its non-empty segments, accepting both `\` and `/`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(['\\', '/']).filter(|s| !s.is_empty()).collect()
}

/// Last segment of a path (`""` for an empty path).
pub fn last_folder(path: &str) -> &str {
    split_path(path).last().copied().unwrap_or("")
}

/// Convert a location as written in a solution file into a host path.
pub fn from_sln_location(location: &str) -> PathBuf {
    let trimmed = location.trim();
    let mut out = if trimmed.starts_with(['\\', '/']) {
        PathBuf::from(std::path::MAIN_SEPARATOR_STR)
    } else {
        PathBuf::new()
    };

    for segment in split_path(trimmed) {
        if cfg!(windows) && out.as_os_str().is_empty() && is_drive(segment) {
            out.push(format!("{segment}\\"));
            continue;
        }
        out.push(segment);
    }
    out
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Render a host path with `\` separators, the way solution files store it.
pub fn to_sln_location(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push(SLN_SEPARATOR),
            Component::CurDir => {}
            Component::ParentDir => push_segment(&mut out, ".."),
            Component::Normal(name) => push_segment(&mut out, &name.to_string_lossy()),
        }
    }
    out
}

fn push_segment(out: &mut String, segment: &str) {
    if !out.is_empty() && !out.ends_with(SLN_SEPARATOR) {
        out.push(SLN_SEPARATOR);
    }
    out.push_str(segment);
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
///
/// `..` directly under the root is discarded; leading `..` of a relative path
/// is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Make a path absolute against the current directory and normalize it.
///
/// Does not resolve symlinks and does not require the path to exist.
pub fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}

/// Part of `path` below the `anchor` directory.
///
/// Unlike [`relative_to`] this never climbs out of the anchor: `None` when
/// `path` is not the anchor or one of its descendants.
pub fn right_part_after(path: &Path, anchor: &Path) -> Option<PathBuf> {
    path.strip_prefix(anchor).ok().map(Path::to_path_buf)
}

/// Express `path` relative to the `anchor` directory.
///
/// Both paths are expected to be normalized. Returns `None` when they do not
/// share a root (different drive prefixes, or one relative and one absolute).
pub fn relative_to(path: &Path, anchor: &Path) -> Option<PathBuf> {
    if path.has_root() != anchor.has_root() {
        return None;
    }

    let path_components: Vec<Component<'_>> = path.components().collect();
    let anchor_components: Vec<Component<'_>> = anchor.components().collect();

    let common = path_components
        .iter()
        .zip(&anchor_components)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && path.has_root() {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..anchor_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path_handles_both_separators() {
        assert_eq!(split_path(r"src\App/App.csproj"), vec!["src", "App", "App.csproj"]);
        assert_eq!(split_path(r"\\server\share\"), vec!["server", "share"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn last_folder_returns_final_segment() {
        assert_eq!(last_folder(r"C:\work\solutions\Lib"), "Lib");
        assert_eq!(last_folder("/tmp/out/"), "out");
        assert_eq!(last_folder(""), "");
    }

    #[test]
    fn sln_location_round_trip_relative() {
        let host = from_sln_location(r"src\App\App.csproj");
        assert_eq!(host, Path::new("src").join("App").join("App.csproj"));
        assert_eq!(to_sln_location(&host), r"src\App\App.csproj");
    }

    #[test]
    fn to_sln_location_keeps_parent_segments() {
        let path = Path::new("..").join("shared").join("Common.csproj");
        assert_eq!(to_sln_location(&path), r"..\shared\Common.csproj");
    }

    #[test]
    fn normalize_folds_parent_and_current() {
        let path = Path::new("/work/a/./b/../c");
        assert_eq!(normalize(path), PathBuf::from("/work/a/c"));
        assert_eq!(normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn right_part_after_anchor_directory() {
        let anchor = Path::new("/Lib/a/Lib");
        assert_eq!(
            right_part_after(Path::new("/Lib/a/Lib/src/Lib.csproj"), anchor),
            Some(PathBuf::from("src/Lib.csproj"))
        );
        assert_eq!(right_part_after(anchor, anchor), Some(PathBuf::new()));
        assert_eq!(right_part_after(Path::new("/Lib/b/x.cs"), anchor), None);
        assert_eq!(right_part_after(Path::new("/Lib/a/Library/x.cs"), anchor), None);
    }

    #[cfg(unix)]
    #[test]
    fn relative_to_descendant_and_sibling() {
        let anchor = Path::new("/work/out");
        assert_eq!(
            relative_to(Path::new("/work/out/src/App/App.csproj"), anchor),
            Some(PathBuf::from("src/App/App.csproj"))
        );
        assert_eq!(
            relative_to(Path::new("/work/other/Lib.csproj"), anchor),
            Some(PathBuf::from("../other/Lib.csproj"))
        );
        assert_eq!(relative_to(anchor, anchor), Some(PathBuf::new()));
    }

    #[test]
    fn relative_to_rejects_mixed_roots() {
        let absolute = std::env::temp_dir();
        assert_eq!(relative_to(Path::new("src"), &absolute), None);
    }
}
