//! Combine a nested template of streams and literal values into one stream.
//!
//! A [`Template`] is a tree of sequences and mappings whose leaves are either
//! literal JSON values or streams of JSON values. [`combine_template`] turns it
//! into a single stream of structures shaped like the template: once every
//! stream leaf has emitted, the output yields the structure with each leaf
//! replaced by its latest value, and it yields again whenever any leaf emits.
//! Only the slot of the leaf that changed is rewritten; literals pass through
//! untouched.
//!
//! # Example
//!
//! ```
//! use combine_template::{combine_template, Template};
//! use futures::channel::mpsc;
//! use futures::executor::block_on;
//! use futures::StreamExt;
//! use serde_json::json;
//!
//! let (user_tx, username) = mpsc::unbounded();
//! let (pass_tx, password) = mpsc::unbounded();
//! let (first_tx, firstname) = mpsc::unbounded();
//! let (last_tx, lastname) = mpsc::unbounded();
//!
//! let mut login_info = combine_template(Template::mapping([
//!     ("magicNumber", Template::literal(3)),
//!     ("userid", Template::source(username)),
//!     ("passwd", Template::source(password)),
//!     (
//!         "name",
//!         Template::mapping([
//!             ("first", Template::source(firstname)),
//!             ("last", Template::source(lastname)),
//!         ]),
//!     ),
//! ]))
//! .unwrap();
//!
//! user_tx.unbounded_send(json!("ada")).unwrap();
//! pass_tx.unbounded_send(json!("secret")).unwrap();
//! first_tx.unbounded_send(json!("Ada")).unwrap();
//! last_tx.unbounded_send(json!("Lovelace")).unwrap();
//!
//! let value = block_on(login_info.next()).unwrap().unwrap();
//! assert_eq!(
//!     *value,
//!     json!({
//!         "magicNumber": 3,
//!         "userid": "ada",
//!         "passwd": "secret",
//!         "name": {"first": "Ada", "last": "Lovelace"}
//!     })
//! );
//! ```

mod combine_latest;
mod combiner;
mod config;
mod error;
mod index;
mod stream;
mod template;

pub use combine_latest::{combine_latest, CombineLatest};
pub use combiner::PatchCombiner;
pub use config::{CombineConfig, EmptyPolicy};
pub use error::{CombineError, TemplateError};
pub use index::{PathIndexer, TemplateIndex};
pub use stream::TemplateStream;
pub use template::{BoxSource, Template};

pub use combine_template_pointer::{Path, PathStep};

use futures::stream::TryStream;
use serde_json::Value;

/// Combine a template into a stream of structures, with default settings.
pub fn combine_template<S>(template: Template<S>) -> Result<TemplateStream<S>, CombineError>
where
    S: TryStream<Ok = Value> + Unpin,
{
    combine_template_with(template, &CombineConfig::default())
}

/// Combine a template into a stream of structures.
///
/// A `null` literal root is treated like an absent template, i.e. an empty
/// mapping. Fails if the root is a stream or a non-container literal, or if a
/// stream leaf sits deeper than `config.max_depth`.
pub fn combine_template_with<S>(
    template: Template<S>,
    config: &CombineConfig,
) -> Result<TemplateStream<S>, CombineError>
where
    S: TryStream<Ok = Value> + Unpin,
{
    let template = match template {
        Template::Literal(Value::Null) => Template::default(),
        other => other,
    };
    let base = template.skeleton();
    let (streams, paths) = PathIndexer::with_max_depth(config.max_depth)
        .index(template)?
        .into_parts();
    Ok(TemplateStream::new(
        CombineLatest::new(streams, config.empty),
        PatchCombiner::new(paths, base),
    ))
}
