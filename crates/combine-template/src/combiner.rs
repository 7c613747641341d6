//! Selective patching of the combined structure.

use std::sync::Arc;

use combine_template_pointer::{format_json_pointer, set, Path, PathError};
use combine_template_util::deep_equal;
use serde_json::Value;
use tracing::trace;

use crate::error::CombineError;

/// Owns the base structure and patches the slots whose source changed.
///
/// Each call to [`apply`](Self::apply) compares the new snapshot with the
/// previous one position by position and writes only the changed values. The
/// structure lives behind an [`Arc`]: it is mutated in place while no
/// emission is still held downstream, and copied on write otherwise, so a
/// value already handed out never changes under its holder.
///
/// The copy is of the whole structure. A consumer that keeps every emission
/// alive (for example by collecting the output) therefore pays one full deep
/// copy per emission that changes a slot; drop or replace earlier emissions
/// to keep patching in place. Changes are detected with an exact comparison
/// (key order and the sign of zero both count), so a slot whose source
/// emitted different data is always rewritten.
#[derive(Debug)]
pub struct PatchCombiner {
    paths: Vec<Path>,
    base: Arc<Value>,
    previous: Vec<Value>,
}

impl PatchCombiner {
    /// `paths[i]` must address a slot of `base` for every `i`.
    pub fn new(paths: Vec<Path>, base: Value) -> Self {
        Self {
            paths,
            base: Arc::new(base),
            previous: Vec::new(),
        }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// The structure as of the last applied snapshot.
    pub fn current(&self) -> &Value {
        &self.base
    }

    /// Apply one combine-latest snapshot and return the updated structure.
    pub fn apply(&mut self, snapshot: Vec<Value>) -> Result<Arc<Value>, CombineError> {
        if snapshot.len() != self.paths.len() {
            return Err(CombineError::SnapshotArity {
                expected: self.paths.len(),
                actual: snapshot.len(),
            });
        }

        let changed: Vec<usize> = snapshot
            .iter()
            .enumerate()
            .filter(|(i, value)| {
                self.previous
                    .get(*i)
                    .map_or(true, |prev| !deep_equal(prev, value))
            })
            .map(|(i, _)| i)
            .collect();

        if !changed.is_empty() {
            let root = Arc::make_mut(&mut self.base);
            for i in changed {
                patch(root, &self.paths[i], snapshot[i].clone())?;
            }
        }

        self.previous = snapshot;
        Ok(Arc::clone(&self.base))
    }
}

fn patch(root: &mut Value, path: &Path, value: Value) -> Result<(), CombineError> {
    // Streams never sit at the root, so an empty path cannot be a slot.
    if path.is_empty() {
        return Err(CombineError::StructuralMismatch {
            pointer: String::new(),
        });
    }
    set(root, path, value).map_err(|err| match err {
        PathError::NotFound { pointer } => CombineError::StructuralMismatch { pointer },
        other => CombineError::Path(other),
    })?;
    trace!(pointer = %format_json_pointer(path), "patched slot");
    Ok(())
}
