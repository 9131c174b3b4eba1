use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// slnmerge - merge and consolidate Visual Studio solution files
#[derive(Parser, Debug)]
#[command(name = "slnmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file to use instead of ./.slnmerge.toml and the user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge solutions into one file without copying anything
    Merge {
        /// Input solution files
        #[arg(required = true, value_name = "SLN")]
        inputs: Vec<PathBuf>,

        /// Name of the merged solution (without .sln)
        #[arg(short, long)]
        name: String,

        /// Directory the merged solution is written to
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Show a diff against the existing output instead of writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy scattered solution trees into the output directory, then merge
    Consolidate {
        /// Input solution files
        #[arg(required = true, value_name = "SLN")]
        inputs: Vec<PathBuf>,

        /// Name of the merged solution (without .sln)
        #[arg(short, long)]
        name: String,

        /// Target directory; created when missing
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Delete the copied .sln files from the target after merging
        #[arg(long)]
        prune_copied: bool,
    },

    /// Report project guid conflicts between solutions
    Check {
        /// Input solution files
        #[arg(required = true, value_name = "SLN")]
        inputs: Vec<PathBuf>,
    },

    /// Show the projects, global sections and folders of a solution
    Inspect {
        /// Solution file
        #[arg(value_name = "SLN")]
        input: PathBuf,
    },
}
