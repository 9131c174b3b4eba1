//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
mod walk;

pub use local::LocalFs;
