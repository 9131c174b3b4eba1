//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MergeUseCase` - Parse inputs, merge or consolidate, save or preview, check conflicts

pub mod merge;

pub use merge::{
    resolve_against, CheckOutcome, MergeMode, MergeOptions, MergeOutcome, MergePreview,
    MergeUseCase,
};
