//! Guid Value Object
//!
//! Identifiers in solution files are written as `{XXXXXXXX-XXXX-...}`.
//! The text between the braces is kept exactly as written; two guids are the
//! same only when that text matches exactly.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Project type of a solution folder entry
pub const SOLUTION_FOLDER_TYPE: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";

/// Error when a guid token is invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidError {
    /// Token is empty (or only braces)
    Empty,
    /// Opening and closing braces do not match
    Unbalanced(String),
    /// Token contains a character that can't appear in a guid
    InvalidChar { token: String, ch: char },
}

impl fmt::Display for GuidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuidError::Empty => write!(f, "guid is empty"),
            GuidError::Unbalanced(token) => write!(f, "unbalanced braces in guid '{}'", token),
            GuidError::InvalidChar { token, ch } => {
                write!(f, "invalid character '{}' in guid '{}'", ch, token)
            }
        }
    }
}

impl std::error::Error for GuidError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Guid(String);

impl Guid {
    /// Parse `{...}` or a bare token.
    pub fn parse(token: &str) -> Result<Self, GuidError> {
        let trimmed = token.trim();
        let inner = match (trimmed.strip_prefix('{'), trimmed.ends_with('}')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(GuidError::Unbalanced(trimmed.to_string())),
        };

        if inner.is_empty() {
            return Err(GuidError::Empty);
        }
        if let Some(ch) = inner
            .chars()
            .find(|c| matches!(c, '{' | '}' | '"') || c.is_whitespace())
        {
            return Err(GuidError::InvalidChar {
                token: trimmed.to_string(),
                ch,
            });
        }

        Ok(Self(inner.to_string()))
    }

    /// Type guid of solution folders
    pub fn solution_folder() -> Self {
        Self(SOLUTION_FOLDER_TYPE.to_string())
    }

    /// Deterministic guid derived from a seed string.
    ///
    /// The same seed always yields the same guid, so regenerated folders keep
    /// their identity across runs.
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let hex: String = digest
            .iter()
            .take(16)
            .map(|b| format!("{:02X}", b))
            .collect();
        Self(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project type guids are compared case-insensitively against the
    /// well-known folder type.
    pub fn is_solution_folder(&self) -> bool {
        self.0.eq_ignore_ascii_case(SOLUTION_FOLDER_TYPE)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}
