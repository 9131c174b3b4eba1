//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Solution` - A parsed `.sln` file (the aggregate)
//! - `Project` - One project block, linked back to its solution by id
//! - `PropertiesBlock` - Global sections copied verbatim
//! - `NestingBlock` - Solution folder hierarchy

pub mod nesting;
pub mod project;
pub mod properties;
pub mod solution;

pub use nesting::{NestEntry, NestingBlock, SolutionFolder};
pub use project::Project;
pub use properties::{GlobalSection, PropertiesBlock};
pub use solution::{Solution, SolutionId};

/// Solution files are written with Windows line endings.
pub const LINE_ENDING: &str = "\r\n";
