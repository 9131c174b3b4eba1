use slnmerge::domain::entities::{NestingBlock, Solution};

use crate::ui::theme::{self, colors, icons};

/// Name, projects, global sections and folder tree of one solution
pub fn render_inspect(
    solution: &Solution,
    nesting: &NestingBlock,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        theme::paint(solution.name(), colors::INFO, color)
    ));
    out.push_str(&format!("  path: {}\n", solution.source_path().display()));
    out.push_str(&format!(
        "  base directory: {}\n",
        solution.base_directory().display()
    ));

    out.push_str(&format!("\nProjects ({}):\n", solution.projects().len()));
    for project in solution.projects() {
        let location = project.location().render(solution.base_directory());
        out.push_str(&format!(
            "  {} {}  {}\n",
            project.guid(),
            project.name(),
            theme::paint(&location, colors::DIM, color)
        ));
    }

    let sections = solution.properties().sections();
    out.push_str(&format!("\nGlobal sections ({}):\n", sections.len()));
    for section in sections {
        out.push_str(&format!(
            "  {} ({}, {} line(s))\n",
            section.name(),
            section.timing(),
            section.lines().len()
        ));
    }

    if !nesting.folders().is_empty() {
        out.push_str(&format!("\nSolution folders ({}):\n", nesting.folders().len()));
        let folder_icon = theme::icon(icons::FOLDER, unicode);
        for folder in nesting.folders() {
            let children = nesting
                .children_of(folder.guid())
                .filter(|child| nesting.folder(child).is_none())
                .count();
            out.push_str(&format!(
                "  {folder_icon} {}  ({children} project(s))\n",
                folder.path()
            ));
        }
    }

    out
}
