//! Global properties block
//!
//! The `GlobalSection(...)` entries between `Global` and `EndGlobal`, except
//! `NestedProjects` which belongs to the nesting block.

use std::fmt;
use std::path::Path;

use crate::domain::entities::LINE_ENDING;
use crate::error::{SlnError, SlnResult};

pub(crate) const NESTED_PROJECTS: &str = "NestedProjects";

const GLOBAL: &str = "Global";
const END_GLOBAL: &str = "EndGlobal";
const SECTION_PREFIX: &str = "GlobalSection(";
const END_SECTION: &str = "EndGlobalSection";

/// One `GlobalSection(Name) = timing` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSection {
    name: String,
    timing: String,
    lines: Vec<String>,
}

impl GlobalSection {
    pub fn new(name: impl Into<String>, timing: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            timing: timing.into(),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `preSolution` or `postSolution`
    pub fn timing(&self) -> &str {
        &self.timing
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for GlobalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t{}{}) = {}{}",
            SECTION_PREFIX, self.name, self.timing, LINE_ENDING
        )?;
        for line in &self.lines {
            write!(f, "\t\t{}{}", line, LINE_ENDING)?;
        }
        write!(f, "\t{}{}", END_SECTION, LINE_ENDING)
    }
}

/// Solution-wide configuration, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertiesBlock {
    sections: Vec<GlobalSection>,
}

impl PropertiesBlock {
    pub fn new(sections: Vec<GlobalSection>) -> Self {
        Self { sections }
    }

    /// Parse the global sections of a solution's raw text.
    ///
    /// Text without a `Global` block yields an empty properties block.
    pub fn parse(text: &str, file: &Path) -> SlnResult<Self> {
        let sections = scan_global_sections(text, file)?
            .into_iter()
            .map(|(_, section)| section)
            .filter(|section| section.name != NESTED_PROJECTS)
            .collect();
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[GlobalSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&GlobalSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for PropertiesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// All global sections, including `NestedProjects`, with their 1-based line.
pub(crate) fn scan_global_sections(
    text: &str,
    file: &Path,
) -> SlnResult<Vec<(usize, GlobalSection)>> {
    let mut lines = text.lines().enumerate();

    let Some((global_index, _)) = lines.by_ref().find(|(_, line)| line.trim() == GLOBAL) else {
        return Ok(Vec::new());
    };

    let mut sections = Vec::new();
    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim();
        if trimmed == END_GLOBAL {
            return Ok(sections);
        }
        if !trimmed.starts_with(SECTION_PREFIX) {
            continue;
        }

        let (name, timing) =
            parse_section_header(trimmed).map_err(|message| SlnError::Malformed {
                file: file.to_path_buf(),
                line: index + 1,
                message,
            })?;

        let mut body = Vec::new();
        let mut closed = false;
        for (_, body_line) in lines.by_ref() {
            let body_trimmed = body_line.trim();
            if body_trimmed == END_SECTION {
                closed = true;
                break;
            }
            if !body_trimmed.is_empty() {
                body.push(body_trimmed.to_string());
            }
        }
        if !closed {
            return Err(SlnError::UnterminatedBlock {
                file: file.to_path_buf(),
                line: index + 1,
                block: "GlobalSection",
                terminator: END_SECTION,
            });
        }

        sections.push((index + 1, GlobalSection::new(name, timing, body)));
    }

    Err(SlnError::UnterminatedBlock {
        file: file.to_path_buf(),
        line: global_index + 1,
        block: GLOBAL,
        terminator: END_GLOBAL,
    })
}

/// Parse `GlobalSection(Name) = timing`
fn parse_section_header(line: &str) -> Result<(String, String), String> {
    let rest = line
        .strip_prefix(SECTION_PREFIX)
        .ok_or_else(|| format!("expected '{}'", SECTION_PREFIX))?;
    let (name, after) = rest
        .split_once(')')
        .ok_or_else(|| "missing ')' after section name".to_string())?;
    let timing = after
        .trim_start()
        .strip_prefix('=')
        .map(str::trim)
        .ok_or_else(|| "expected '=' after section name".to_string())?;

    if name.trim().is_empty() {
        return Err("section name is empty".to_string());
    }
    Ok((name.trim().to_string(), timing.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TEXT: &str = "Global\r\n\
        \tGlobalSection(SolutionConfigurationPlatforms) = preSolution\r\n\
        \t\tDebug|Any CPU = Debug|Any CPU\r\n\
        \t\tRelease|Any CPU = Release|Any CPU\r\n\
        \tEndGlobalSection\r\n\
        \tGlobalSection(NestedProjects) = preSolution\r\n\
        \t\t{A} = {B}\r\n\
        \tEndGlobalSection\r\n\
        \tGlobalSection(SolutionProperties) = preSolution\r\n\
        \t\tHideSolutionNode = FALSE\r\n\
        \tEndGlobalSection\r\n\
        EndGlobal\r\n";

    fn file() -> PathBuf {
        PathBuf::from("Test.sln")
    }

    #[test]
    fn parse_skips_nested_projects() {
        let block = PropertiesBlock::parse(TEXT, &file()).unwrap();
        let names: Vec<&str> = block.sections().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["SolutionConfigurationPlatforms", "SolutionProperties"]);

        let configs = block.section("SolutionConfigurationPlatforms").unwrap();
        assert_eq!(configs.timing(), "preSolution");
        assert_eq!(
            configs.lines(),
            ["Debug|Any CPU = Debug|Any CPU", "Release|Any CPU = Release|Any CPU"]
        );
    }

    #[test]
    fn scan_includes_nested_projects_with_line() {
        let sections = scan_global_sections(TEXT, &file()).unwrap();
        let (line, nested) = &sections[1];
        assert_eq!(*line, 6);
        assert_eq!(nested.name(), NESTED_PROJECTS);
        assert_eq!(nested.lines(), ["{A} = {B}"]);
    }

    #[test]
    fn missing_global_is_empty() {
        let block = PropertiesBlock::parse("Microsoft Visual Studio Solution File\n", &file()).unwrap();
        assert!(block.is_empty());
        assert_eq!(block.to_string(), "");
    }

    #[test]
    fn unterminated_section_is_an_error() {
        let text = "Global\n\tGlobalSection(X) = preSolution\n\t\ta = b\nEndGlobal\n";
        let err = PropertiesBlock::parse(text, &file()).unwrap_err();
        assert!(matches!(
            err,
            SlnError::UnterminatedBlock {
                block: "GlobalSection",
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn unterminated_global_is_an_error() {
        let text = "Global\n\tGlobalSection(X) = preSolution\n\tEndGlobalSection\n";
        let err = PropertiesBlock::parse(text, &file()).unwrap_err();
        assert!(matches!(err, SlnError::UnterminatedBlock { block: "Global", .. }));
    }

    #[test]
    fn display_uses_tabs_and_crlf() {
        let section = GlobalSection::new("SolutionProperties", "preSolution", vec!["HideSolutionNode = FALSE".into()]);
        assert_eq!(
            section.to_string(),
            "\tGlobalSection(SolutionProperties) = preSolution\r\n\
             \t\tHideSolutionNode = FALSE\r\n\
             \tEndGlobalSection\r\n"
        );
    }

    #[test]
    fn reparse_of_display_is_identical() {
        let block = PropertiesBlock::parse(TEXT, &file()).unwrap();
        let text = format!("Global\r\n{}EndGlobal\r\n", block);
        assert_eq!(PropertiesBlock::parse(&text, &file()).unwrap(), block);
    }
}
