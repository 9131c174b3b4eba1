//! Solution aggregate
//!
//! A `Solution` owns its projects, its global properties and its folder
//! hierarchy. It is built by parsing a file or by merging other solutions;
//! after construction only a merge re-points project ownership.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::domain::entities::{NestingBlock, Project, PropertiesBlock, LINE_ENDING};
use crate::domain::ports::FileSystem;
use crate::domain::services::consolidator::{self, ConsolidateOptions};
use crate::domain::services::merger::{self, MergeResult};
use crate::domain::value_objects::path;
use crate::error::{SlnError, SlnResult};
use crate::infrastructure::fs::LocalFs;

/// Fixed header of every file we write
pub const SOLUTION_HEADER: &str =
    "Microsoft Visual Studio Solution File, Format Version 11.00\r\n# Visual Studio 2010\r\n";

/// Extension of solution files
pub const SOLUTION_EXTENSION: &str = "sln";

const BOM: char = '\u{feff}';

/// Process-unique id projects use to refer to their owning solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolutionId(u64);

impl SolutionId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct Solution {
    id: SolutionId,
    name: String,
    base_directory: PathBuf,
    source_path: PathBuf,
    raw_text: String,
    projects: Vec<Project>,
    properties: PropertiesBlock,
    nesting: NestingBlock,
}

impl Solution {
    /// Empty shell; `base_directory` is made absolute and normalized.
    pub(crate) fn new(
        name: impl Into<String>,
        base_directory: &Path,
        properties: PropertiesBlock,
        nesting: NestingBlock,
    ) -> SlnResult<Self> {
        let name = name.into();
        let base_directory = path::absolute(base_directory)?;
        let source_path = base_directory.join(format!("{}.{}", name, SOLUTION_EXTENSION));
        Ok(Self {
            id: SolutionId::next(),
            name,
            base_directory,
            source_path,
            raw_text: String::new(),
            projects: Vec::new(),
            properties,
            nesting,
        })
    }

    /// Parse a solution file from the local disk.
    pub fn parse(path: &Path) -> SlnResult<Self> {
        Self::load(&LocalFs::new(), path)
    }

    /// Parse a solution file through a `FileSystem`.
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> SlnResult<Self> {
        let raw_text = fs.read(path).map_err(|e| SlnError::Read {
            file: path.to_path_buf(),
            source: e.into_io(),
        })?;
        Self::from_text(path, raw_text)
    }

    /// Build a solution from text as if it had been read from `path`.
    #[tracing::instrument(level = "debug", skip(raw_text), fields(path = %path.display()))]
    pub fn from_text(path: &Path, raw_text: impl Into<String>) -> SlnResult<Self> {
        let mut raw_text = raw_text.into();
        if raw_text.starts_with(BOM) {
            raw_text.drain(..BOM.len_utf8());
        }

        let absolute = path::absolute(path).map_err(|source| SlnError::Read {
            file: path.to_path_buf(),
            source,
        })?;
        let base_directory = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| absolute.clone());
        let name = absolute
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let properties = PropertiesBlock::parse(&raw_text, &absolute)?;

        let mut solution = Self::new(name, &base_directory, properties, NestingBlock::new())?;
        solution.source_path = absolute.clone();
        solution.raw_text = raw_text;

        let projects = Project::parse_all(&solution, &absolute)?;
        debug!(
            solution = %solution.name,
            projects = projects.len(),
            sections = solution.properties.sections().len(),
            "parsed solution"
        );
        solution.projects = projects;

        Ok(solution)
    }

    pub fn id(&self) -> SolutionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File this solution was parsed from (or will be saved to, for merges)
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Where `save` writes: `<base_directory>/<name>.sln`
    pub fn path(&self) -> PathBuf {
        self.base_directory
            .join(format!("{}.{}", self.name, SOLUTION_EXTENSION))
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn properties(&self) -> &PropertiesBlock {
        &self.properties
    }

    pub fn nesting(&self) -> &NestingBlock {
        &self.nesting
    }

    /// Take ownership of `projects`, re-pointing each one at this solution.
    pub(crate) fn adopt_projects(&mut self, projects: Vec<Project>) {
        let id = self.id;
        self.projects = projects
            .into_iter()
            .map(|mut project| {
                project.reparent(id);
                project
            })
            .collect();
    }

    /// Canonical text of this solution
    pub fn serialize(&self) -> String {
        let mut out = String::from(SOLUTION_HEADER);
        for project in &self.projects {
            debug_assert_eq!(project.owner(), self.id, "project rendered for a foreign solution");
            out.push_str(&project.fragment(&self.base_directory));
        }
        out.push_str(&self.nesting.folder_declarations());
        out.push_str("Global");
        out.push_str(LINE_ENDING);
        out.push_str(&self.properties.to_string());
        out.push_str(&self.nesting.nested_section());
        out.push_str("EndGlobal");
        out.push_str(LINE_ENDING);
        out
    }

    /// Write `<base_directory>/<name>.sln`, replacing any existing file.
    pub fn save(&self) -> SlnResult<PathBuf> {
        self.save_with(&LocalFs::new())
    }

    pub fn save_with<F: FileSystem + ?Sized>(&self, fs: &F) -> SlnResult<PathBuf> {
        let target = self.path();
        fs.write(&target, &self.serialize())?;
        debug!(path = %target.display(), "saved solution");
        Ok(target)
    }

    /// Merge solutions that already share `target_directory`.
    ///
    /// See [`merger::merge_solutions`].
    pub fn merge_solutions(
        new_name: &str,
        target_directory: &Path,
        solutions: &[&Solution],
    ) -> SlnResult<MergeResult> {
        merger::merge_solutions(new_name, target_directory, solutions)
    }

    /// Copy scattered solutions under `target_directory`, then merge.
    ///
    /// See [`consolidator::consolidate_solutions`].
    pub fn consolidate_solutions<F: FileSystem + ?Sized>(
        fs: &F,
        new_name: &str,
        target_directory: &Path,
        solutions: &[Solution],
        options: &ConsolidateOptions,
    ) -> SlnResult<MergeResult> {
        consolidator::consolidate_solutions(fs, new_name, target_directory, solutions, options)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
