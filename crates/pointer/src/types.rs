//! Type definitions for access paths.

use std::fmt;

use crate::util::escape_component;

/// One step of an access path.
///
/// Mapping entries are addressed by key and sequence entries by index. The
/// step keeps the kind of container it was recorded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// An access path from the root of a structure to one of its slots.
pub type Path = Vec<PathStep>;

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(&escape_component(key)),
            PathStep::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}
