//! Project location
//!
//! Locations are resolved once, at parse time, against the directory of the
//! solution that declared them. Keeping them absolute in memory lets a project
//! be re-rendered relative to whichever solution owns it later.

use std::path::{Path, PathBuf};

use super::path::{from_sln_location, normalize, relative_to, to_sln_location};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectLocation {
    /// Absolute, lexically normalized file path
    Path(PathBuf),
    /// URL-style location (web site projects); never resolved
    Verbatim(String),
}

impl ProjectLocation {
    /// Resolve a location as written in a solution file.
    pub fn resolve(raw: &str, base_directory: &Path) -> Self {
        if raw.contains("://") {
            return ProjectLocation::Verbatim(raw.to_string());
        }
        let host = from_sln_location(raw);
        let joined = if host.has_root() {
            host
        } else {
            base_directory.join(host)
        };
        ProjectLocation::Path(normalize(&joined))
    }

    /// Render the location relative to `base_directory`, `\`-separated.
    pub fn render(&self, base_directory: &Path) -> String {
        match self {
            ProjectLocation::Path(path) => relative_to(path, base_directory)
                .map(|rel| to_sln_location(&rel))
                .unwrap_or_else(|| to_sln_location(path)),
            ProjectLocation::Verbatim(raw) => raw.clone(),
        }
    }

    /// Text used for identity comparison
    pub fn key_text(&self) -> String {
        match self {
            ProjectLocation::Path(path) => path.to_string_lossy().into_owned(),
            ProjectLocation::Verbatim(raw) => raw.clone(),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ProjectLocation::Path(path) => Some(path),
            ProjectLocation::Verbatim(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf {
        std::env::temp_dir().join("slnmerge-location").join("App")
    }

    #[test]
    fn resolve_relative_location() {
        let location = ProjectLocation::resolve(r"src\App\App.csproj", &base());
        assert_eq!(
            location.as_path(),
            Some(base().join("src").join("App").join("App.csproj").as_path())
        );
    }

    #[test]
    fn resolve_folds_parent_segments() {
        let location = ProjectLocation::resolve(r"..\Shared\Shared.csproj", &base());
        let expected = base()
            .parent()
            .unwrap()
            .join("Shared")
            .join("Shared.csproj");
        assert_eq!(location.as_path(), Some(expected.as_path()));
    }

    #[test]
    fn render_relative_to_other_base() {
        let location = ProjectLocation::resolve(r"src\App.csproj", &base());
        assert_eq!(location.render(&base()), r"src\App.csproj");

        let sibling = base().parent().unwrap().join("Combined");
        assert_eq!(location.render(&sibling), r"..\App\src\App.csproj");
    }

    #[test]
    fn urls_stay_verbatim() {
        let raw = "http://localhost:8080/WebSite/";
        let location = ProjectLocation::resolve(raw, &base());
        assert_eq!(location, ProjectLocation::Verbatim(raw.to_string()));
        assert_eq!(location.render(&base()), raw);
        assert_eq!(location.key_text(), raw);
        assert!(location.as_path().is_none());
    }
}
