//! Merge and consolidate command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};

use slnmerge::application::{resolve_against, MergeMode, MergeOptions, MergeOutcome, MergeUseCase};
use slnmerge::config::Config;
use slnmerge::infrastructure::LocalFs;

use crate::ui::components::diff::render_solution_diff;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ConflictEvent, ProjectEvent, SavedEvent, StartEvent};
use crate::ui::views::merge::{render_merge_header, render_merge_summary};

pub struct MergeArgs {
    pub inputs: Vec<PathBuf>,
    pub name: String,
    pub output: PathBuf,
    pub mode: MergeMode,
    pub dry_run: bool,
    pub prune_copied: bool,
}

/// Execute `merge` or `consolidate`
pub fn cmd_merge(args: MergeArgs, config: &Config, ui: &UiContext) -> Result<()> {
    let command = match args.mode {
        MergeMode::InPlace => "merge",
        MergeMode::Consolidate => "consolidate",
    };
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let inputs: Vec<PathBuf> = args
        .inputs
        .iter()
        .map(|p| resolve_against(p, &cwd))
        .collect();
    let warnings_file = config
        .report
        .warnings_file
        .as_deref()
        .map(|p| resolve_against(p, &cwd));

    let options = MergeOptions::new(&args.name, resolve_against(&args.output, &cwd))
        .with_mode(args.mode)
        .with_dry_run(args.dry_run)
        .with_prune_copied_solutions(args.prune_copied || config.consolidate.prune_copied_solutions)
        .with_warnings_file(warnings_file);

    if ui.json {
        emit_event(&StartEvent::new(command, inputs.len()))?;
    } else {
        eprint!(
            "{}",
            render_merge_header(command, &args.name, inputs.len(), ui.unicode)
        );
    }

    let outcome = MergeUseCase::new(LocalFs::new())
        .execute(&inputs, &options)
        .with_context(|| format!("{command} failed"))?;

    if ui.json {
        emit_json(command, &outcome)?;
    } else {
        render_text(&outcome, ui);
    }

    Ok(())
}

fn emit_json(command: &str, outcome: &MergeOutcome) -> Result<()> {
    let solution = &outcome.solution;
    for project in solution.projects() {
        let folder = solution
            .nesting()
            .folder_of(project.guid())
            .map(|f| f.path());
        emit_event(&ProjectEvent::new(project, solution.base_directory()).with_folder(folder))?;
    }
    for conflict in &outcome.conflicts {
        emit_event(&ConflictEvent::new(conflict))?;
    }

    let saved = SavedEvent::new(
        &outcome.output_path,
        solution.projects().len(),
        solution.nesting().folders().len(),
    );
    let saved = match &outcome.preview {
        Some(preview) => saved.preview(preview.is_unchanged()),
        None => saved,
    };
    emit_event(&saved)?;

    emit_event(
        &CompleteEvent::success(command, outcome.conflicts.len())
            .with_duplicates_removed(outcome.duplicates_removed()),
    )?;
    Ok(())
}

fn render_text(outcome: &MergeOutcome, ui: &UiContext) {
    if let Some(preview) = &outcome.preview {
        if preview.is_unchanged() {
            println!("{} is up to date", outcome.output_path.display());
        } else {
            let label = outcome
                .output_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            print!(
                "{}",
                render_solution_diff(
                    &label,
                    preview.existing.as_deref().unwrap_or(""),
                    &preview.merged,
                    ui.color
                )
            );
        }
    }

    print!("{}", render_merge_summary(outcome, ui.color, ui.unicode));
}
