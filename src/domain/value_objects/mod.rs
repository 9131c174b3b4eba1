//! Value Objects
//!
//! Immutable types with structural equality.

pub mod guid;
pub mod location;
pub mod path;
pub mod project_key;

pub use guid::{Guid, GuidError, SOLUTION_FOLDER_TYPE};
pub use location::ProjectLocation;
pub use project_key::ProjectKey;
