//! Merge Use Case
//!
//! Parses the input solutions, merges or consolidates them, then saves the
//! result (or previews it) and writes the optional warnings file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::entities::Solution;
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    consolidate_solutions, find_identity_conflicts, format_conflicts, merge_solutions,
    ConsolidateOptions, MergeResult,
};
use crate::domain::value_objects::path;
use crate::error::SlnResult;

use super::options::{MergeMode, MergeOptions};
use super::result::{CheckOutcome, MergeOutcome, MergePreview};

pub struct MergeUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> MergeUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Parse every input, stopping at the first failure.
    pub fn load_inputs(&self, inputs: &[PathBuf]) -> SlnResult<Vec<Solution>> {
        inputs
            .iter()
            .map(|input| Solution::load(&self.fs, input))
            .collect()
    }

    pub fn execute(&self, inputs: &[PathBuf], options: &MergeOptions) -> SlnResult<MergeOutcome> {
        let solutions = self.load_inputs(inputs)?;
        self.execute_loaded(solutions, options)
    }

    /// Merge already parsed solutions.
    ///
    /// `dry_run` only skips the final writes; consolidation still copies
    /// trees because the merge needs the copies to resolve locations.
    pub fn execute_loaded(
        &self,
        solutions: Vec<Solution>,
        options: &MergeOptions,
    ) -> SlnResult<MergeOutcome> {
        let output_dir = path::absolute(&options.output_dir)?;
        let input_projects = solutions.iter().map(|s| s.projects().len()).sum();
        let outside_inputs: Vec<PathBuf> = solutions
            .iter()
            .filter(|s| s.base_directory() != output_dir)
            .map(|s| s.source_path().to_path_buf())
            .collect();

        let MergeResult {
            solution,
            warnings,
            conflicts,
        } = match options.mode {
            MergeMode::InPlace => {
                for input in &outside_inputs {
                    warn!(
                        input = %input.display(),
                        output = %output_dir.display(),
                        "input solution lives outside the output directory; locations will be rewritten relative to it"
                    );
                }
                let refs: Vec<&Solution> = solutions.iter().collect();
                merge_solutions(&options.name, &output_dir, &refs)?
            }
            MergeMode::Consolidate => {
                if !self.fs.is_dir(&output_dir) {
                    self.fs.create_dir_all(&output_dir)?;
                }
                consolidate_solutions(
                    &self.fs,
                    &options.name,
                    &output_dir,
                    &solutions,
                    &ConsolidateOptions {
                        prune_copied_solutions: options.prune_copied_solutions,
                    },
                )?
            }
        };

        let output_path = solution.path();
        let (saved, preview) = if options.dry_run {
            let existing = self.fs.read(&output_path).ok();
            let preview = MergePreview {
                existing,
                merged: solution.serialize(),
            };
            (false, Some(preview))
        } else {
            solution.save_with(&self.fs)?;
            info!(path = %output_path.display(), "saved merged solution");
            if let Some(file) = &options.warnings_file {
                self.fs.write(file, &warnings)?;
            }
            (true, None)
        };

        Ok(MergeOutcome {
            solution,
            output_path,
            saved,
            warnings,
            conflicts,
            input_projects,
            outside_inputs,
            preview,
        })
    }

    /// Diagnostics only: parse the inputs and report identity conflicts.
    pub fn check(&self, inputs: &[PathBuf]) -> SlnResult<CheckOutcome> {
        let solutions = self.load_inputs(inputs)?;
        let refs: Vec<&Solution> = solutions.iter().collect();
        let conflicts = find_identity_conflicts(&refs);
        Ok(CheckOutcome {
            inputs: solutions
                .iter()
                .map(|s| (s.name().to_string(), s.projects().len()))
                .collect(),
            warnings: format_conflicts(&conflicts),
            conflicts,
        })
    }
}

/// Resolve `path` against `cwd` unless it is already absolute.
pub fn resolve_against(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
