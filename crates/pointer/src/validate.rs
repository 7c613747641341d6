//! Validation functions for access paths.

use crate::types::PathStep;
use crate::PathError;

/// Default maximum path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate that a path is no deeper than `max` steps.
///
/// # Example
///
/// ```
/// use combine_template_pointer::{validate_path, PathStep, MAX_PATH_LENGTH};
///
/// validate_path(&[PathStep::from("foo"), PathStep::from(0)], MAX_PATH_LENGTH).unwrap();
/// let deep: Vec<PathStep> = (0..300usize).map(PathStep::from).collect();
/// validate_path(&deep, MAX_PATH_LENGTH).unwrap_err();
/// ```
pub fn validate_path(path: &[PathStep], max: usize) -> Result<(), PathError> {
    if path.len() > max {
        return Err(PathError::TooDeep {
            depth: path.len(),
            max,
        });
    }
    Ok(())
}
