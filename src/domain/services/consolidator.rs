//! Solution consolidator
//!
//! Brings solutions that live in different directories under one target
//! directory before merging them. Each stray solution's whole directory tree
//! is copied into the target and its `.sln` re-parsed from there, so project
//! locations resolve against the target.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::Solution;
use crate::domain::ports::FileSystem;
use crate::domain::services::merger::{merge_solutions, MergeResult};
use crate::domain::value_objects::path;
use crate::error::SlnResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsolidateOptions {
    /// Delete each copied `.sln` from the target once it has been re-parsed
    pub prune_copied_solutions: bool,
}

/// Copy scattered solutions into `target_directory`, then merge everything.
///
/// Solutions whose base directory already is the target are merged as-is, and
/// their `.sln` files are never pruned, even when a copied tree brought in a
/// file with the same name.
/// A missing source or target directory stops the operation at that
/// solution; trees copied before it stay on disk.
#[tracing::instrument(
    skip(fs, solutions, options),
    fields(target = %target_directory.display(), inputs = solutions.len())
)]
pub fn consolidate_solutions<F: FileSystem + ?Sized>(
    fs: &F,
    new_name: &str,
    target_directory: &Path,
    solutions: &[Solution],
    options: &ConsolidateOptions,
) -> SlnResult<MergeResult> {
    let target = path::absolute(target_directory)?;

    let (clean, scattered): (Vec<&Solution>, Vec<&Solution>) = solutions
        .iter()
        .partition(|s| s.base_directory() == target);

    let mut copied = Vec::with_capacity(scattered.len());
    for solution in scattered {
        let files = fs.copy_tree(solution.base_directory(), &target)?;
        info!(
            solution = solution.name(),
            from = %solution.base_directory().display(),
            files,
            "copied solution tree"
        );

        let file_name = solution
            .source_path()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| solution.path().into_os_string());
        let relocated = target.join(file_name);
        let reparsed = Solution::load(fs, &relocated)?;

        if options.prune_copied_solutions {
            if clean.iter().any(|s| s.source_path() == relocated.as_path()) {
                warn!(
                    path = %relocated.display(),
                    "copied solution replaced an input already in the target; not pruning it"
                );
            } else {
                fs.remove(&relocated)?;
                debug!(path = %relocated.display(), "removed copied solution file");
            }
        }
        copied.push(reparsed);
    }

    let inputs: Vec<&Solution> = clean.into_iter().chain(copied.iter()).collect();
    merge_solutions(new_name, &target, &inputs)
}
