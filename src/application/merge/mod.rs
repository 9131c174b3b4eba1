//! Merge Use Case
//!
//! Orchestrates merging solution files.
//!
//! This module handles:
//! - Parsing the input solutions
//! - Merging in place or consolidating into the output directory
//! - Saving (or previewing) the merged solution and the warnings report

mod options;
mod result;
mod use_case;

pub use options::{MergeMode, MergeOptions};
pub use result::{CheckOutcome, MergeOutcome, MergePreview};
pub use use_case::{resolve_against, MergeUseCase};
