//! Solution merger
//!
//! Builds one solution out of several that already share a directory:
//! - Same guid and same location: one project (first occurrence kept)
//! - Same guid, different location: both kept, reported as a conflict
//! - Properties come from the first input
//! - Solution folders are rebuilt from project directories

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::{NestingBlock, Project, Solution};
use crate::domain::services::diagnostics::{find_identity_conflicts, format_conflicts, IdentityConflict};
use crate::domain::value_objects::{path, ProjectKey};
use crate::error::{SlnError, SlnResult};

#[derive(Debug)]
pub struct MergeResult {
    pub solution: Solution,
    /// Formatted conflict report, empty when there are none
    pub warnings: String,
    pub conflicts: Vec<IdentityConflict>,
}

impl MergeResult {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Merge `solutions` into a new solution named `new_name` rooted at
/// `target_directory`. Nothing is written to disk.
///
/// A relative `target_directory` is resolved against the current directory
/// before folders are derived from project locations.
#[tracing::instrument(
    skip(solutions),
    fields(target = %target_directory.display(), inputs = solutions.len())
)]
pub fn merge_solutions(
    new_name: &str,
    target_directory: &Path,
    solutions: &[&Solution],
) -> SlnResult<MergeResult> {
    let Some(first) = solutions.first() else {
        return Err(SlnError::NoSolutions);
    };
    let target = path::absolute(target_directory)?;

    let projects = dedupe_projects(solutions);

    let conflicts = find_identity_conflicts(solutions);
    for conflict in &conflicts {
        warn!(
            guid = %conflict.guid,
            locations = conflict.locations().len(),
            "project guid claimed by different locations"
        );
    }
    let warnings = format_conflicts(&conflicts);

    let nesting = NestingBlock::rebuild(&projects, &target);
    let mut solution = Solution::new(
        new_name,
        &target,
        first.properties().clone(),
        nesting,
    )?;
    solution.adopt_projects(projects);

    info!(
        solution = new_name,
        projects = solution.projects().len(),
        conflicts = conflicts.len(),
        "merged solutions"
    );

    Ok(MergeResult {
        solution,
        warnings,
        conflicts,
    })
}

/// Concatenate every input's projects, dropping later entries whose
/// `ProjectKey` was already seen.
pub fn dedupe_projects(solutions: &[&Solution]) -> Vec<Project> {
    let mut seen: HashSet<ProjectKey> = HashSet::new();
    let mut projects = Vec::new();

    for solution in solutions {
        for project in solution.projects() {
            if seen.insert(project.key()) {
                projects.push(project.clone());
            } else {
                debug!(
                    project = project.name(),
                    solution = solution.name(),
                    "dropping duplicate project"
                );
            }
        }
    }

    projects
}
