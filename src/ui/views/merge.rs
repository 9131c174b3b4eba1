use slnmerge::application::MergeOutcome;
use slnmerge::domain::services::IdentityConflict;

use crate::ui::theme::{self, colors, icons};

pub fn render_merge_header(command: &str, name: &str, inputs: usize, unicode: bool) -> String {
    let arrow = if unicode { "→" } else { "->" };
    format!("slnmerge {command}: {inputs} solution(s) {arrow} {name}.sln\n")
}

pub fn render_merge_summary(outcome: &MergeOutcome, color: bool, unicode: bool) -> String {
    let mut out = String::new();

    for input in &outcome.outside_inputs {
        out.push_str(&format!(
            "{} {} is outside the output directory\n",
            theme::paint(theme::icon(icons::WARNING, unicode), colors::WARNING, color),
            input.display()
        ));
    }

    let solution = &outcome.solution;
    let verb = if outcome.saved { "Saved" } else { "Would save" };
    out.push_str(&format!(
        "{} {} {}\n",
        theme::paint(theme::icon(icons::SUCCESS, unicode), colors::SUCCESS, color),
        verb,
        outcome.output_path.display()
    ));
    out.push_str(&format!(
        "  {} project(s), {} solution folder(s), {} duplicate(s) removed\n",
        solution.projects().len(),
        solution.nesting().folders().len(),
        outcome.duplicates_removed()
    ));

    if outcome.has_conflicts() {
        out.push('\n');
        out.push_str(&render_conflicts(&outcome.conflicts, &outcome.warnings, color, unicode));
    }

    out
}

/// Conflict count line followed by the report text
pub fn render_conflicts(
    conflicts: &[IdentityConflict],
    report: &str,
    color: bool,
    unicode: bool,
) -> String {
    if conflicts.is_empty() {
        return String::new();
    }
    let mut out = format!(
        "{} {} identity conflict(s):\n",
        theme::paint(theme::icon(icons::WARNING, unicode), colors::WARNING, color),
        conflicts.len()
    );
    out.push_str(report);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_ascii_fallback() {
        assert_eq!(
            render_merge_header("merge", "All", 2, false),
            "slnmerge merge: 2 solution(s) -> All.sln\n"
        );
    }

    #[test]
    fn conflicts_empty_renders_nothing() {
        assert_eq!(render_conflicts(&[], "", false, true), "");
    }
}
