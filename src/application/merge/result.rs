//! Merge result types

use std::path::PathBuf;

use crate::domain::entities::Solution;
use crate::domain::services::IdentityConflict;

/// Text of the output before and after a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePreview {
    /// Current content of the output file, if it exists
    pub existing: Option<String>,
    pub merged: String,
}

impl MergePreview {
    pub fn is_unchanged(&self) -> bool {
        self.existing.as_deref() == Some(self.merged.as_str())
    }
}

/// Result of a merge or consolidate run
#[derive(Debug)]
pub struct MergeOutcome {
    pub solution: Solution,
    /// Where the solution was (or would be) written
    pub output_path: PathBuf,
    /// False for dry runs
    pub saved: bool,
    /// Formatted conflict report, empty when there are none
    pub warnings: String,
    pub conflicts: Vec<IdentityConflict>,
    /// Number of projects across all inputs, duplicates included
    pub input_projects: usize,
    /// Input solutions that did not live in the output directory
    pub outside_inputs: Vec<PathBuf>,
    /// Set for dry runs
    pub preview: Option<MergePreview>,
}

impl MergeOutcome {
    /// Projects dropped as exact duplicates
    pub fn duplicates_removed(&self) -> usize {
        self.input_projects
            .saturating_sub(self.solution.projects().len())
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Result of a diagnostics-only run
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Solution name and project count per input, in input order
    pub inputs: Vec<(String, usize)>,
    pub warnings: String,
    pub conflicts: Vec<IdentityConflict>,
}
