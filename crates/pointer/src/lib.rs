//! Access paths into nested JSON structures.
//!
//! A [`Path`] is an ordered list of [`PathStep`]s leading from the root of a
//! structure to one of its slots. Steps keep the container key they were
//! recorded from: mapping keys stay strings, sequence positions stay indices.
//! Paths render as [JSON Pointers (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! for display.
//!
//! # Example
//!
//! ```
//! use combine_template_pointer::{format_json_pointer, get, PathStep};
//!
//! let path = vec![PathStep::from("foo"), PathStep::from(1)];
//! assert_eq!(format_json_pointer(&path), "/foo/1");
//!
//! let doc = serde_json::json!({"foo": [10, 20]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(20)));
//! assert_eq!(get(&doc, &[PathStep::from("foo"), PathStep::from("1")]), None);
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

mod get;
pub use get::{get, get_mut, set};

mod util;
pub use util::{escape_component, format_json_pointer};

pub mod validate;
pub use validate::{validate_path, MAX_PATH_LENGTH};

/// Errors raised while resolving or validating a path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no slot at {pointer}")]
    NotFound { pointer: String },
    #[error("path depth {depth} exceeds maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}
