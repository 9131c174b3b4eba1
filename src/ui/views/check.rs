use slnmerge::application::CheckOutcome;

use crate::ui::theme::{self, colors, icons};
use crate::ui::views::merge::render_conflicts;

pub fn render_check(outcome: &CheckOutcome, color: bool, unicode: bool) -> String {
    let mut out = String::new();
    for (name, projects) in &outcome.inputs {
        out.push_str(&format!("  {name}: {projects} project(s)\n"));
    }

    if outcome.conflicts.is_empty() {
        out.push_str(&format!(
            "{} No identity conflicts\n",
            theme::paint(theme::icon(icons::SUCCESS, unicode), colors::SUCCESS, color)
        ));
    } else {
        out.push_str(&render_conflicts(
            &outcome.conflicts,
            &outcome.warnings,
            color,
            unicode,
        ));
    }
    out
}
