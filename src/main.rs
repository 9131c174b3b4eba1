//! slnmerge CLI - merge and consolidate Visual Studio solution files
//!
//! Usage: slnmerge <COMMAND>
//!
//! Commands:
//!   merge        Merge solutions into one file without copying anything
//!   consolidate  Copy scattered solution trees into one directory, then merge
//!   check        Report project guid conflicts
//!   inspect      Show the structure of a solution

mod cli;
mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use slnmerge::application::MergeMode;
use slnmerge::config::{Config, ConfigWarning};

use crate::cli::{Cli, Commands};
use crate::commands::merge::MergeArgs;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = command_name(&cli.command);

    if let Err(err) = run(cli) {
        if json {
            let _ = emit_event(&ErrorEvent::new(command, format!("{err:#}")));
        } else {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let (config, config_warnings) = Config::load_layered(cli.config.as_deref(), &cwd)?;

    let verbosity = config.output.verbosity.level().saturating_add(cli.verbose);
    slnmerge::telemetry::init(verbosity, cli.json);
    report_config_warnings(&config_warnings);

    let ui = UiContext::new(cli.json, verbosity, cli.color, &config);

    match cli.command {
        Commands::Merge {
            inputs,
            name,
            output,
            dry_run,
        } => commands::merge::cmd_merge(
            MergeArgs {
                inputs,
                name,
                output,
                mode: MergeMode::InPlace,
                dry_run,
                prune_copied: false,
            },
            &config,
            &ui,
        ),
        Commands::Consolidate {
            inputs,
            name,
            output,
            prune_copied,
        } => commands::merge::cmd_merge(
            MergeArgs {
                inputs,
                name,
                output,
                mode: MergeMode::Consolidate,
                dry_run: false,
                prune_copied,
            },
            &config,
            &ui,
        ),
        Commands::Check { inputs } => commands::check::cmd_check(&inputs, &ui),
        Commands::Inspect { input } => commands::inspect::cmd_inspect(&input, &ui),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Merge { .. } => "merge",
        Commands::Consolidate { .. } => "consolidate",
        Commands::Check { .. } => "check",
        Commands::Inspect { .. } => "inspect",
    }
}

fn report_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let line = w.line.map(|l| format!(":{l}")).unwrap_or_default();
        match &w.suggestion {
            Some(s) => warn!(
                "unknown config key '{}' in {}{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                s
            ),
            None => warn!("unknown config key '{}' in {}{}", w.key, w.file.display(), line),
        }
    }
}
