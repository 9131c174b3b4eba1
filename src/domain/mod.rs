//! Domain Layer
//!
//! The solution model and the merge engine.
//!
//! ## Structure
//!
//! - `entities/` - Solution, Project, PropertiesBlock, NestingBlock
//! - `value_objects/` - Immutable value types (Guid, ProjectLocation, ProjectKey, path helpers)
//! - `services/` - Merger, Consolidator, conflict diagnostics
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **I/O through ports** - Disk access goes through the `FileSystem` trait;
//!    `Solution::parse` and `Solution::save` are shorthands over `LocalFs`
//! 2. **Immutable after construction** - Only a merge re-points project owners
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
