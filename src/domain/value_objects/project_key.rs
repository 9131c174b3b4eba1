//! Project identity key
//!
//! Two project entries are the same project only when both the guid and the
//! resolved location match. Same guid with a different location is a conflict.

use std::fmt;

use super::guid::Guid;
use super::location::ProjectLocation;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectKey {
    guid: Guid,
    location: String,
}

impl ProjectKey {
    pub fn new(guid: Guid, location: &ProjectLocation) -> Self {
        Self {
            guid,
            location: location.key_text(),
        }
    }

    pub fn guid(&self) -> &Guid {
        &self.guid
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.guid, self.location)
    }
}
