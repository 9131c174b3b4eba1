//! Project entity
//!
//! One `Project(...) ... EndProject` block of a solution file.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::solution::{Solution, SolutionId};
use crate::domain::entities::LINE_ENDING;
use crate::domain::value_objects::{Guid, ProjectKey, ProjectLocation};
use crate::error::{SlnError, SlnResult};

const PROJECT_PREFIX: &str = "Project(";
const END_PROJECT: &str = "EndProject";

/// A project referenced by a solution
///
/// `owner` is a plain id of the solution the project currently belongs to.
/// It is only used to check which solution a project was rendered for; the
/// solution owns its projects, never the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    type_guid: Guid,
    name: String,
    location: ProjectLocation,
    guid: Guid,
    body: Vec<String>,
    owner: SolutionId,
}

impl Project {
    pub fn new(
        type_guid: Guid,
        name: impl Into<String>,
        location: ProjectLocation,
        guid: Guid,
        owner: SolutionId,
    ) -> Self {
        Self {
            type_guid,
            name: name.into(),
            location,
            guid,
            body: Vec::new(),
            owner,
        }
    }

    /// Attach verbatim body lines (`ProjectSection` blocks and the like)
    pub fn with_body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    pub fn type_guid(&self) -> &Guid {
        &self.type_guid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &ProjectLocation {
        &self.location
    }

    pub fn guid(&self) -> &Guid {
        &self.guid
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn owner(&self) -> SolutionId {
        self.owner
    }

    /// Identity used for deduplication
    pub fn key(&self) -> ProjectKey {
        ProjectKey::new(self.guid.clone(), &self.location)
    }

    pub(crate) fn reparent(&mut self, owner: SolutionId) {
        self.owner = owner;
    }

    /// Format the project block with its location relative to `base_directory`.
    pub fn fragment(&self, base_directory: &Path) -> String {
        let mut out = format!(
            "Project(\"{}\") = \"{}\", \"{}\", \"{}\"{}",
            self.type_guid,
            self.name,
            self.location.render(base_directory),
            self.guid,
            LINE_ENDING
        );
        for line in &self.body {
            out.push_str(line);
            out.push_str(LINE_ENDING);
        }
        out.push_str(END_PROJECT);
        out.push_str(LINE_ENDING);
        out
    }

    /// Parse every non-folder project block of `solution`'s raw text.
    ///
    /// Each project is linked to `solution` and its location is resolved
    /// against the solution's base directory. `file` is only used for error
    /// reporting.
    pub fn parse_all(solution: &Solution, file: &Path) -> SlnResult<Vec<Project>> {
        let mut projects = Vec::new();
        for block in scan_project_blocks(solution.raw_text(), file)? {
            if block.type_guid.is_solution_folder() {
                debug!(folder = %block.name, line = block.line, "skipping solution folder entry");
                continue;
            }
            let location = ProjectLocation::resolve(&block.location, solution.base_directory());
            projects.push(
                Project::new(block.type_guid, block.name, location, block.guid, solution.id())
                    .with_body(block.body),
            );
        }
        Ok(projects)
    }
}

/// A raw `Project(...)` block before location resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectBlock {
    pub type_guid: Guid,
    pub name: String,
    pub location: String,
    pub guid: Guid,
    pub body: Vec<String>,
    /// 1-based line of the header
    pub line: usize,
}

/// Find every `Project(...) ... EndProject` block in `text`.
pub(crate) fn scan_project_blocks(text: &str, file: &Path) -> SlnResult<Vec<ProjectBlock>> {
    let mut blocks = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim();
        if !trimmed.starts_with(PROJECT_PREFIX) {
            continue;
        }

        let header = parse_header(trimmed).map_err(|message| SlnError::Malformed {
            file: file.to_path_buf(),
            line: index + 1,
            message,
        })?;

        let mut body = Vec::new();
        let mut closed = false;
        for (_, body_line) in lines.by_ref() {
            if body_line.trim() == END_PROJECT {
                closed = true;
                break;
            }
            body.push(body_line.trim_end().to_string());
        }
        if !closed {
            return Err(SlnError::UnterminatedBlock {
                file: file.to_path_buf(),
                line: index + 1,
                block: "Project",
                terminator: END_PROJECT,
            });
        }

        blocks.push(ProjectBlock {
            type_guid: header.type_guid,
            name: header.name,
            location: header.location,
            guid: header.guid,
            body,
            line: index + 1,
        });
    }

    Ok(blocks)
}

struct ProjectHeader {
    type_guid: Guid,
    name: String,
    location: String,
    guid: Guid,
}

/// Parse `Project("{TYPE}") = "Name", "Location", "{GUID}"`
fn parse_header(line: &str) -> Result<ProjectHeader, String> {
    let rest = line
        .strip_prefix(PROJECT_PREFIX)
        .ok_or_else(|| format!("expected '{}'", PROJECT_PREFIX))?;
    let close = rest
        .find(')')
        .ok_or_else(|| "missing ')' after project type".to_string())?;

    let type_fields = quoted_fields(&rest[..close])?;
    let [type_guid] = type_fields.as_slice() else {
        return Err(format!(
            "expected 1 quoted project type, found {}",
            type_fields.len()
        ));
    };

    let assignment = rest[close + 1..]
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| "expected '=' after project type".to_string())?;

    let fields = quoted_fields(assignment)?;
    let [name, location, guid] = fields.as_slice() else {
        return Err(format!("expected 3 quoted fields, found {}", fields.len()));
    };

    Ok(ProjectHeader {
        type_guid: Guid::parse(type_guid).map_err(|e| e.to_string())?,
        name: name.to_string(),
        location: location.to_string(),
        guid: Guid::parse(guid).map_err(|e| e.to_string())?,
    })
}

/// Split `"a", "b", "c"` into its quoted values.
fn quoted_fields(text: &str) -> Result<Vec<&str>, String> {
    let mut fields = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('"')
            .ok_or_else(|| format!("expected '\"' at '{}'", rest))?;
        let end = inner
            .find('"')
            .ok_or_else(|| "unterminated quoted field".to_string())?;
        fields.push(&inner[..end]);

        rest = inner[end + 1..].trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
        } else if !rest.is_empty() {
            return Err(format!("expected ',' between fields at '{}'", rest));
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const CSHARP: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

    fn file() -> PathBuf {
        PathBuf::from("Test.sln")
    }

    #[test]
    fn parse_header_fields() {
        let header = parse_header(&format!(
            r#"Project("{{{CSHARP}}}") = "App", "src\App\App.csproj", "{{11111111-1111-1111-1111-111111111111}}""#
        ))
        .unwrap();
        assert_eq!(header.type_guid.as_str(), CSHARP);
        assert_eq!(header.name, "App");
        assert_eq!(header.location, r"src\App\App.csproj");
        assert_eq!(header.guid.as_str(), "11111111-1111-1111-1111-111111111111");
    }

    #[test]
    fn parse_header_allows_commas_in_names() {
        let header =
            parse_header(r#"Project("{T}") = "App, Core", "App.csproj", "{G}""#).unwrap();
        assert_eq!(header.name, "App, Core");
    }

    #[test]
    fn parse_header_rejects_missing_fields() {
        let err = parse_header(r#"Project("{T}") = "App", "App.csproj""#).err().unwrap();
        assert_eq!(err, "expected 3 quoted fields, found 2");

        let err = parse_header(r#"Project("{T}") "App""#).err().unwrap();
        assert_eq!(err, "expected '=' after project type");
    }

    #[test]
    fn scan_keeps_body_verbatim() {
        let text = "Project(\"{T}\") = \"App\", \"App.csproj\", \"{G}\"\r\n\
                    \tProjectSection(ProjectDependencies) = postProject\r\n\
                    \t\t{D} = {D}\r\n\
                    \tEndProjectSection\r\n\
                    EndProject\r\n";
        let blocks = scan_project_blocks(text, &file()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].body,
            vec![
                "\tProjectSection(ProjectDependencies) = postProject",
                "\t\t{D} = {D}",
                "\tEndProjectSection",
            ]
        );
        assert_eq!(blocks[0].line, 1);
    }

    #[test]
    fn scan_reports_malformed_line_number() {
        let text = "Header\nProject(\"{T}\") = \"App\"\nEndProject\n";
        let err = scan_project_blocks(text, &file()).unwrap_err();
        assert!(matches!(err, SlnError::Malformed { line: 2, .. }));
        assert!(err.is_parse_failure());
    }

    #[test]
    fn scan_reports_unterminated_block() {
        let text = "Project(\"{T}\") = \"App\", \"App.csproj\", \"{G}\"\nGlobal\n";
        let err = scan_project_blocks(text, &file()).unwrap_err();
        assert!(matches!(
            err,
            SlnError::UnterminatedBlock {
                line: 1,
                block: "Project",
                ..
            }
        ));
    }

    #[test]
    fn fragment_renders_relative_location() {
        let base = std::env::temp_dir().join("slnmerge-project");
        let location = ProjectLocation::resolve(r"src\App\App.csproj", &base);
        let project = Project::new(
            Guid::parse(CSHARP).unwrap(),
            "App",
            location,
            Guid::parse("{G1}").unwrap(),
            SolutionId::next(),
        )
        .with_body(vec!["\tProjectSection(Foo) = preProject".into(), "\tEndProjectSection".into()]);

        assert_eq!(
            project.fragment(&base),
            format!(
                "Project(\"{{{CSHARP}}}\") = \"App\", \"src\\App\\App.csproj\", \"{{G1}}\"\r\n\
                 \tProjectSection(Foo) = preProject\r\n\
                 \tEndProjectSection\r\n\
                 EndProject\r\n"
            )
        );
    }
}
