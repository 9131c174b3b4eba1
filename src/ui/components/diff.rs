use similar::{ChangeTag, TextDiff};

use crate::ui::theme::{self, colors};

/// Lines of unchanged context kept around each change
const CONTEXT: usize = 3;

/// Unified diff of two solution texts.
///
/// Line endings are compared after stripping, so a CRLF file diffed against
/// its LF twin shows no changes. Unchanged stretches are folded into hunks.
pub fn render_solution_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let old = old.replace("\r\n", "\n");
    let new = new.replace("\r\n", "\n");
    let diff = TextDiff::from_lines(&old, &new);

    let mut out = String::new();
    out.push_str(&theme::paint(&format!("--- a/{path}"), colors::INFO, supports_color));
    out.push('\n');
    out.push_str(&theme::paint(&format!("+++ b/{path}"), colors::INFO, supports_color));
    out.push('\n');

    for group in diff.grouped_ops(CONTEXT) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;
        let header = format!(
            "@@ -{},{} +{},{} @@",
            old_range.start + 1,
            old_range.len(),
            new_range.start + 1,
            new_range.len()
        );
        out.push_str(&theme::paint(&header, colors::DIM, supports_color));
        out.push('\n');

        for op in &group {
            for change in diff.iter_changes(op) {
                let (sign, color) = match change.tag() {
                    ChangeTag::Delete => ("-", colors::ERROR),
                    ChangeTag::Insert => ("+", colors::SUCCESS),
                    ChangeTag::Equal => (" ", colors::DIM),
                };
                let line = format!("{sign}{}", change.value().trim_end_matches('\n'));
                out.push_str(&theme::paint(&line, color, supports_color));
                out.push('\n');
            }
        }
    }

    out
}
