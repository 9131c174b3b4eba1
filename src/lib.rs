//! slnmerge - merge and consolidate Visual Studio solution files
//!
//! Parses `.sln` files into a solution model, merges any number of them into
//! one deduplicated solution with a rebuilt folder hierarchy, and reports
//! projects whose guid is claimed by different locations.
//!
//! ```no_run
//! use std::path::Path;
//! use slnmerge::Solution;
//!
//! let app = Solution::parse(Path::new("App/App.sln"))?;
//! let lib = Solution::parse(Path::new("App/Lib.sln"))?;
//! let merged = Solution::merge_solutions("Combined", Path::new("App"), &[&app, &lib])?;
//! if !merged.warnings.is_empty() {
//!     eprintln!("{}", merged.warnings);
//! }
//! merged.solution.save()?;
//! # Ok::<(), slnmerge::SlnError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{NestingBlock, Project, PropertiesBlock, Solution, SolutionId};
pub use domain::services::{ConsolidateOptions, IdentityConflict, MergeResult};
pub use domain::value_objects::{Guid, ProjectKey, ProjectLocation};
pub use error::{SlnError, SlnResult};
