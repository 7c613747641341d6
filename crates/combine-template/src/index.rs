//! Path indexing: find every stream leaf of a template and record its path.

use std::fmt;

use combine_template_pointer::{format_json_pointer, validate_path, Path, PathStep, MAX_PATH_LENGTH};
use serde_json::Value;
use tracing::debug;

use crate::error::{kind_name, CombineError};
use crate::template::Template;

/// The stream registry of a template.
///
/// `streams[i]` was found at `paths[i]`. Entries are in depth-first order with
/// sibling order preserved; this order is the position contract of the
/// combine-latest snapshot.
pub struct TemplateIndex<S> {
    streams: Vec<S>,
    paths: Vec<Path>,
}

impl<S> fmt::Debug for TemplateIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateIndex")
            .field("pointers", &self.pointers())
            .finish_non_exhaustive()
    }
}

impl<S> TemplateIndex<S> {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// The recorded paths rendered as JSON pointers.
    pub fn pointers(&self) -> Vec<String> {
        self.paths.iter().map(|path| format_json_pointer(path)).collect()
    }

    /// Registry position of the stream found at `pointer`.
    pub fn position(&self, pointer: &str) -> Option<usize> {
        self.paths
            .iter()
            .position(|path| format_json_pointer(path) == pointer)
    }

    pub fn into_parts(self) -> (Vec<S>, Vec<Path>) {
        (self.streams, self.paths)
    }
}

/// Walks a template depth-first and builds its [`TemplateIndex`].
#[derive(Debug, Clone)]
pub struct PathIndexer {
    max_depth: usize,
}

impl Default for PathIndexer {
    fn default() -> Self {
        Self::with_max_depth(MAX_PATH_LENGTH)
    }
}

impl PathIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Index a template, taking ownership of its streams.
    ///
    /// The root must be a container. A literal JSON array or object, or
    /// `null`, is accepted as a root without streams.
    pub fn index<S>(&self, template: Template<S>) -> Result<TemplateIndex<S>, CombineError> {
        match &template {
            Template::Stream(_) => return Err(CombineError::StreamRoot),
            Template::Literal(Value::Null | Value::Array(_) | Value::Object(_)) => {}
            Template::Literal(other) => {
                return Err(CombineError::NonContainerRoot {
                    kind: kind_name(other),
                })
            }
            Template::Sequence(_) | Template::Mapping(_) => {}
        }

        let mut index = TemplateIndex {
            streams: Vec::new(),
            paths: Vec::new(),
        };
        let mut prefix = Path::new();
        self.walk(template, &mut prefix, &mut index)?;
        debug!(streams = index.len(), "indexed template");
        Ok(index)
    }

    fn walk<S>(
        &self,
        node: Template<S>,
        prefix: &mut Path,
        index: &mut TemplateIndex<S>,
    ) -> Result<(), CombineError> {
        match node {
            Template::Sequence(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    prefix.push(PathStep::Index(i));
                    self.walk(item, prefix, index)?;
                    prefix.pop();
                }
            }
            Template::Mapping(entries) => {
                for (key, item) in entries {
                    prefix.push(PathStep::Key(key));
                    self.walk(item, prefix, index)?;
                    prefix.pop();
                }
            }
            Template::Stream(stream) => {
                validate_path(prefix, self.max_depth)?;
                index.streams.push(stream);
                index.paths.push(prefix.clone());
            }
            Template::Literal(_) => {}
        }
        Ok(())
    }
}
