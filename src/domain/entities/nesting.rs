//! Solution folder hierarchy
//!
//! Solution folders are virtual: they exist only as folder-type project
//! entries plus the `NestedProjects` global section mapping child guids to
//! parent guids.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

use tracing::debug;

use crate::domain::entities::project::{scan_project_blocks, Project};
use crate::domain::entities::properties::{scan_global_sections, NESTED_PROJECTS};
use crate::domain::entities::LINE_ENDING;
use crate::domain::value_objects::path::{last_folder, relative_to};
use crate::domain::value_objects::Guid;
use crate::error::{SlnError, SlnResult};

/// A virtual folder in the solution tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFolder {
    guid: Guid,
    name: String,
    path: String,
}

impl SolutionFolder {
    /// Folder for a `/`-joined relative path; the guid is derived from it.
    pub fn for_path(path: &str) -> Self {
        Self {
            guid: Guid::from_seed(&format!("slnmerge:folder:{}", path)),
            name: last_folder(path).to_string(),
            path: path.to_string(),
        }
    }

    pub fn guid(&self) -> &Guid {
        &self.guid
    }

    /// Display name (last path segment)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full `/`-joined path from the solution root
    pub fn path(&self) -> &str {
        &self.path
    }

    fn fragment(&self) -> String {
        format!(
            "Project(\"{}\") = \"{}\", \"{}\", \"{}\"{}EndProject{}",
            Guid::solution_folder(),
            self.name,
            self.name,
            self.guid,
            LINE_ENDING,
            LINE_ENDING
        )
    }
}

/// `child` is nested directly under `parent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestEntry {
    pub child: Guid,
    pub parent: Guid,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NestingBlock {
    folders: Vec<SolutionFolder>,
    entries: Vec<NestEntry>,
}

impl NestingBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive folders from the directory layout of `projects`.
    ///
    /// A project at `src/App/App.csproj` (relative to `target_directory`) is
    /// nested under folder `src/App`, itself nested under `src`. Projects at
    /// the root, outside the target directory, or with URL locations stay at
    /// the top level. A project guid is nested at most once (first wins).
    pub fn rebuild(projects: &[Project], target_directory: &Path) -> Self {
        let mut block = Self::new();
        let mut folder_index: HashMap<String, Guid> = HashMap::new();
        let mut nested_children: HashSet<Guid> = HashSet::new();

        for project in projects {
            let Some(segments) = folder_segments(project, target_directory) else {
                continue;
            };
            if nested_children.contains(project.guid()) {
                debug!(guid = %project.guid(), "project guid already nested; keeping first");
                continue;
            }

            let mut parent: Option<Guid> = None;
            for depth in 1..=segments.len() {
                let folder_path = segments[..depth].join("/");
                let guid = match folder_index.get(&folder_path) {
                    Some(guid) => guid.clone(),
                    None => {
                        let folder = SolutionFolder::for_path(&folder_path);
                        let guid = folder.guid.clone();
                        if let Some(parent) = &parent {
                            block.entries.push(NestEntry {
                                child: guid.clone(),
                                parent: parent.clone(),
                            });
                        }
                        block.folders.push(folder);
                        folder_index.insert(folder_path, guid.clone());
                        guid
                    }
                };
                parent = Some(guid);
            }

            if let Some(parent) = parent {
                nested_children.insert(project.guid().clone());
                block.entries.push(NestEntry {
                    child: project.guid().clone(),
                    parent,
                });
            }
        }

        block
    }

    /// Read folder declarations and the `NestedProjects` section of `text`.
    pub fn parse(text: &str, file: &Path) -> SlnResult<Self> {
        let mut block = Self::new();

        let folders: Vec<(Guid, String)> = scan_project_blocks(text, file)?
            .into_iter()
            .filter(|b| b.type_guid.is_solution_folder())
            .map(|b| (b.guid, b.name))
            .collect();

        for (line, section) in scan_global_sections(text, file)? {
            if section.name() != NESTED_PROJECTS {
                continue;
            }
            for (offset, entry) in section.lines().iter().enumerate() {
                let parsed = entry
                    .split_once('=')
                    .ok_or_else(|| "expected '{CHILD} = {PARENT}'".to_string())
                    .and_then(|(child, parent)| {
                        Ok(NestEntry {
                            child: Guid::parse(child).map_err(|e| e.to_string())?,
                            parent: Guid::parse(parent).map_err(|e| e.to_string())?,
                        })
                    });
                match parsed {
                    Ok(entry) => block.entries.push(entry),
                    Err(message) => {
                        return Err(SlnError::Malformed {
                            file: file.to_path_buf(),
                            line: line + 1 + offset,
                            message,
                        })
                    }
                }
            }
        }

        for (guid, name) in &folders {
            let path = block.folder_path(guid, &folders, name);
            block.folders.push(SolutionFolder {
                guid: guid.clone(),
                name: name.clone(),
                path,
            });
        }

        Ok(block)
    }

    pub fn folders(&self) -> &[SolutionFolder] {
        &self.folders
    }

    pub fn entries(&self) -> &[NestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.entries.is_empty()
    }

    pub fn folder_by_path(&self, path: &str) -> Option<&SolutionFolder> {
        self.folders.iter().find(|f| f.path == path)
    }

    pub fn folder(&self, guid: &Guid) -> Option<&SolutionFolder> {
        self.folders.iter().find(|f| &f.guid == guid)
    }

    /// Folder a project (or folder) is nested in, if any
    pub fn folder_of(&self, child: &Guid) -> Option<&SolutionFolder> {
        self.parent_of(child).and_then(|parent| self.folder(parent))
    }

    pub fn parent_of(&self, child: &Guid) -> Option<&Guid> {
        self.entries
            .iter()
            .find(|e| &e.child == child)
            .map(|e| &e.parent)
    }

    pub fn children_of<'a>(&'a self, parent: &'a Guid) -> impl Iterator<Item = &'a Guid> + 'a {
        self.entries
            .iter()
            .filter(move |e| &e.parent == parent)
            .map(|e| &e.child)
    }

    /// Folder-type project entries, one per folder
    pub fn folder_declarations(&self) -> String {
        self.folders.iter().map(SolutionFolder::fragment).collect()
    }

    /// The `NestedProjects` global section (empty string when nothing nests)
    pub fn nested_section(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut out = format!(
            "\tGlobalSection({}) = preSolution{}",
            NESTED_PROJECTS, LINE_ENDING
        );
        for entry in &self.entries {
            out.push_str(&format!(
                "\t\t{} = {}{}",
                entry.child, entry.parent, LINE_ENDING
            ));
        }
        out.push_str("\tEndGlobalSection");
        out.push_str(LINE_ENDING);
        out
    }

    /// `/`-joined path of a parsed folder, following parent links.
    fn folder_path(&self, guid: &Guid, folders: &[(Guid, String)], name: &str) -> String {
        let mut segments = vec![name.to_string()];
        let mut current = guid;
        // Bounded by the folder count so a cyclic section can't loop forever.
        for _ in 0..folders.len() {
            let Some(parent) = self.parent_of(current) else {
                break;
            };
            let Some((_, parent_name)) = folders.iter().find(|(g, _)| g == parent) else {
                break;
            };
            segments.push(parent_name.clone());
            current = parent;
        }
        segments.reverse();
        segments.join("/")
    }
}

/// Directory segments of a project's folder relative to `target_directory`.
fn folder_segments(project: &Project, target_directory: &Path) -> Option<Vec<String>> {
    let directory = project.location().as_path()?.parent()?;
    let relative = relative_to(directory, target_directory)?;
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        debug!(
            project = project.name(),
            "project lives outside the target directory; not nested"
        );
        return None;
    }
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!segments.is_empty()).then_some(segments)
}
