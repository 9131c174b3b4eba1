//! Identity conflict diagnostics
//!
//! A conflict is one project guid claimed by entries at different locations.
//! Same guid at the same location is a plain duplicate and is not reported.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::Solution;
use crate::domain::value_objects::Guid;

/// One place a conflicting guid was declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictOccurrence {
    pub solution: String,
    pub solution_path: PathBuf,
    pub project_name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityConflict {
    pub guid: Guid,
    pub occurrences: Vec<ConflictOccurrence>,
}

impl IdentityConflict {
    /// Distinct locations claimed for the guid, first-seen order
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for occurrence in &self.occurrences {
            if !seen.contains(&occurrence.location.as_str()) {
                seen.push(occurrence.location.as_str());
            }
        }
        seen
    }
}

/// Every guid declared at two or more distinct locations across `solutions`.
///
/// Conflicts come out in the order their guid was first seen. Occurrences
/// list every declaration, duplicates included.
pub fn find_identity_conflicts(solutions: &[&Solution]) -> Vec<IdentityConflict> {
    let mut order: Vec<Guid> = Vec::new();
    let mut by_guid: HashMap<Guid, Vec<ConflictOccurrence>> = HashMap::new();

    for solution in solutions {
        for project in solution.projects() {
            let occurrences = by_guid.entry(project.guid().clone()).or_insert_with(|| {
                order.push(project.guid().clone());
                Vec::new()
            });
            occurrences.push(ConflictOccurrence {
                solution: solution.name().to_string(),
                solution_path: solution.source_path().to_path_buf(),
                project_name: project.name().to_string(),
                location: project.location().key_text(),
            });
        }
    }

    order
        .into_iter()
        .filter_map(|guid| {
            let occurrences = by_guid.remove(&guid)?;
            let conflict = IdentityConflict { guid, occurrences };
            (conflict.locations().len() > 1).then_some(conflict)
        })
        .collect()
}

/// Human-readable report; empty when there are no conflicts.
pub fn format_conflicts(conflicts: &[IdentityConflict]) -> String {
    let mut out = String::new();
    for conflict in conflicts {
        let _ = writeln!(
            out,
            "Project guid {} is used by {} different locations:",
            conflict.guid,
            conflict.locations().len()
        );
        for occurrence in &conflict.occurrences {
            let _ = writeln!(
                out,
                "  - {} ({}) in solution {} [{}]",
                occurrence.location,
                occurrence.project_name,
                occurrence.solution,
                occurrence.solution_path.display()
            );
        }
    }
    out
}

/// Conflict report for `solutions`; empty when none.
pub fn diagnose_duplicate_guids(solutions: &[&Solution]) -> String {
    format_conflicts(&find_identity_conflicts(solutions))
}
