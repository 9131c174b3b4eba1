//! Check command handler
//!
//! Reports identity conflicts without merging anything.

use std::path::PathBuf;

use anyhow::{Context, Result};

use slnmerge::application::{resolve_against, MergeUseCase};
use slnmerge::infrastructure::LocalFs;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ConflictEvent, StartEvent};
use crate::ui::views::check::render_check;

/// Conflicts are reported, never fatal: the command exits 0 when every
/// input parses.
pub fn cmd_check(inputs: &[PathBuf], ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let inputs: Vec<PathBuf> = inputs.iter().map(|p| resolve_against(p, &cwd)).collect();

    if ui.json {
        emit_event(&StartEvent::new("check", inputs.len()))?;
    }

    let outcome = MergeUseCase::new(LocalFs::new())
        .check(&inputs)
        .context("check failed")?;

    if ui.json {
        for conflict in &outcome.conflicts {
            emit_event(&ConflictEvent::new(conflict))?;
        }
        emit_event(&CompleteEvent::success("check", outcome.conflicts.len()))?;
    } else {
        print!("{}", render_check(&outcome, ui.color, ui.unicode));
    }

    Ok(())
}
