//! Common test utilities for slnmerge CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace plus an empty user config directory
//! - Fixtures: solution text builders and well-known guids

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
