//! Combination settings.

use combine_template_pointer::MAX_PATH_LENGTH;
use serde::{Deserialize, Serialize};

/// What the output stream does when the template holds no streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Emit the cloned template once, then complete.
    #[default]
    EmitOnce,
    /// Complete without emitting.
    Never,
}

/// Settings for [`combine_template_with`](crate::combine_template_with).
///
/// ```
/// use combine_template::{CombineConfig, EmptyPolicy};
///
/// let config: CombineConfig = serde_json::from_str(r#"{"empty": "never"}"#).unwrap();
/// assert_eq!(config.empty, EmptyPolicy::Never);
/// assert_eq!(config.max_depth, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    pub empty: EmptyPolicy,
    /// Deepest access path a stream leaf may sit at.
    pub max_depth: usize,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            empty: EmptyPolicy::default(),
            max_depth: MAX_PATH_LENGTH,
        }
    }
}
