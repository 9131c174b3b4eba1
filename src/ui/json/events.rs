//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start` first and `complete` (or `error`) last.

use std::path::Path;

use serde::Serialize;
use slnmerge::domain::entities::Project;
use slnmerge::domain::services::{ConflictOccurrence, IdentityConflict};
use slnmerge::domain::value_objects::Guid;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub inputs: usize,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, inputs: usize) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            inputs,
        }
    }
}

/// One project of a merged or inspected solution.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub guid: &'a Guid,
    pub type_guid: &'a Guid,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<&'a str>,
}

impl<'a> ProjectEvent<'a> {
    pub fn new(project: &'a Project, base_directory: &Path) -> Self {
        Self {
            event: "project",
            name: project.name(),
            guid: project.guid(),
            type_guid: project.type_guid(),
            location: project.location().render(base_directory),
            folder: None,
        }
    }

    pub fn with_folder(mut self, folder: Option<&'a str>) -> Self {
        self.folder = folder;
        self
    }
}

/// A project guid claimed by more than one location.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictEvent<'a> {
    pub event: &'static str,
    pub guid: &'a Guid,
    pub occurrences: &'a [ConflictOccurrence],
}

impl<'a> ConflictEvent<'a> {
    pub fn new(conflict: &'a IdentityConflict) -> Self {
        Self {
            event: "conflict",
            guid: &conflict.guid,
            occurrences: &conflict.occurrences,
        }
    }
}

/// Emitted once the merged solution is on disk (or previewed).
#[derive(Debug, Clone, Serialize)]
pub struct SavedEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
    pub projects: usize,
    pub folders: usize,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<bool>,
}

impl<'a> SavedEvent<'a> {
    pub fn new(path: &'a Path, projects: usize, folders: usize) -> Self {
        Self {
            event: "saved",
            path,
            projects,
            folders,
            dry_run: false,
            unchanged: None,
        }
    }

    pub fn preview(mut self, unchanged: bool) -> Self {
        self.dry_run = true;
        self.unchanged = Some(unchanged);
        self
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub conflicts: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates_removed: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str, conflicts: usize) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            conflicts,
            duplicates_removed: None,
        }
    }

    pub fn with_duplicates_removed(mut self, count: usize) -> Self {
        self.duplicates_removed = Some(count);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}
