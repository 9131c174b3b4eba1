//! Inspect command handler

use std::path::Path;

use anyhow::{Context, Result};

use slnmerge::domain::entities::{NestingBlock, Solution};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ProjectEvent, StartEvent};
use crate::ui::views::inspect::render_inspect;

pub fn cmd_inspect(input: &Path, ui: &UiContext) -> Result<()> {
    let solution = Solution::parse(input)
        .with_context(|| format!("failed to inspect {}", input.display()))?;
    let nesting = NestingBlock::parse(solution.raw_text(), solution.source_path())?;

    if ui.json {
        emit_event(&StartEvent::new("inspect", 1))?;
        for project in solution.projects() {
            let folder = nesting.folder_of(project.guid()).map(|f| f.path());
            emit_event(
                &ProjectEvent::new(project, solution.base_directory()).with_folder(folder),
            )?;
        }
        emit_event(&CompleteEvent::success("inspect", 0))?;
    } else {
        print!("{}", render_inspect(&solution, &nesting, ui.color, ui.unicode));
    }

    Ok(())
}
