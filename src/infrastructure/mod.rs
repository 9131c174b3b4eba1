//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (atomic writes, tree copy, directory walks)

pub mod fs;

pub use fs::LocalFs;
