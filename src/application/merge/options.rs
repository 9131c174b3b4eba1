//! Merge options

use std::path::PathBuf;

/// How inputs living outside the output directory are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Merge as-is; project locations are re-rendered relative to the output
    #[default]
    InPlace,
    /// Copy stray solution trees into the output directory first
    Consolidate,
}

/// Options for the merge and consolidate commands
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Name of the merged solution (file stem of the output)
    pub name: String,
    /// Directory the merged solution is saved to
    pub output_dir: PathBuf,
    pub mode: MergeMode,
    /// Compute the merged text without writing anything
    pub dry_run: bool,
    /// Consolidate only: delete copied `.sln` files after re-parsing them
    pub prune_copied_solutions: bool,
    /// Also write the conflict report here
    pub warnings_file: Option<PathBuf>,
}

impl MergeOptions {
    pub fn new(name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set mode
    pub fn with_mode(mut self, mode: MergeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_prune_copied_solutions(mut self, prune: bool) -> Self {
        self.prune_copied_solutions = prune;
        self
    }

    pub fn with_warnings_file(mut self, path: Option<PathBuf>) -> Self {
        self.warnings_file = path;
        self
    }
}
