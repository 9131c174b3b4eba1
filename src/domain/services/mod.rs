//! Domain Services
//!
//! Business logic that operates on several solutions at once.
//! Merging and diagnostics never touch the disk; consolidation reaches it
//! only through the `FileSystem` port.

pub mod consolidator;
pub mod diagnostics;
pub mod merger;

pub use consolidator::{consolidate_solutions, ConsolidateOptions};
pub use diagnostics::{
    diagnose_duplicate_guids, find_identity_conflicts, format_conflicts, ConflictOccurrence,
    IdentityConflict,
};
pub use merger::{dedupe_projects, merge_solutions, MergeResult};
