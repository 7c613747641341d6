//! Error types for template combination.

use combine_template_pointer::PathError;
use thiserror::Error;

/// Errors raised while indexing a template or patching the combined structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombineError {
    #[error("template root is a stream; wrap it in a sequence or mapping")]
    StreamRoot,
    #[error("template root must be a sequence or mapping, found {kind}")]
    NonContainerRoot { kind: &'static str },
    /// The combine-latest snapshot does not line up with the indexed paths.
    #[error("snapshot has {actual} values but {expected} paths were indexed")]
    SnapshotArity { expected: usize, actual: usize },
    /// An indexed path no longer resolves inside the base structure. Indexer
    /// and combiner disagree about the shape, which is a bug rather than bad
    /// input.
    #[error("indexed path {pointer:?} does not resolve in the base structure")]
    StructuralMismatch { pointer: String },
    #[error(transparent)]
    Path(#[from] PathError),
}

/// An error delivered on the output stream.
///
/// Source errors carry the upstream error untouched. Either variant ends the
/// output stream.
#[derive(Debug, Error)]
pub enum TemplateError<E> {
    #[error("source stream failed: {0}")]
    Source(E),
    #[error(transparent)]
    Combine(#[from] CombineError),
}

impl<E> TemplateError<E> {
    /// The upstream error, if a source failed.
    pub fn into_source(self) -> Option<E> {
        match self {
            TemplateError::Source(err) => Some(err),
            TemplateError::Combine(_) => None,
        }
    }
}

pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
