//! The template model.

use std::convert::Infallible;
use std::fmt;

use combine_template_util::clone;
use futures::stream::{BoxStream, Stream, StreamExt};
use indexmap::IndexMap;
use serde_json::Value;

/// A boxed source stream of JSON values.
pub type BoxSource<E = Infallible> = BoxStream<'static, Result<Value, E>>;

/// A nested structure whose leaves are literal values or streams.
///
/// The kind of every node is fixed by its variant when the template is built
/// and is never re-evaluated. Literal leaves are opaque, even when they hold
/// a JSON array or object, and streams are never descended into.
pub enum Template<S = BoxSource> {
    Literal(Value),
    Sequence(Vec<Template<S>>),
    Mapping(IndexMap<String, Template<S>>),
    Stream(S),
}

impl<S> Template<S> {
    /// An opaque literal leaf.
    pub fn literal(value: impl Into<Value>) -> Self {
        Template::Literal(value.into())
    }

    pub fn sequence(items: impl IntoIterator<Item = Template<S>>) -> Self {
        Template::Sequence(items.into_iter().collect())
    }

    /// A mapping container. Entries keep the order they are given in; a
    /// repeated key keeps its first position and takes the last value.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Template<S>)>) -> Self {
        Template::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Template::Sequence(_) | Template::Mapping(_))
    }

    /// Number of stream leaves reachable from this node.
    pub fn stream_count(&self) -> usize {
        match self {
            Template::Literal(_) => 0,
            Template::Sequence(items) => items.iter().map(Template::stream_count).sum(),
            Template::Mapping(entries) => entries.values().map(Template::stream_count).sum(),
            Template::Stream(_) => 1,
        }
    }

    /// Deep copy of the template's shape as a JSON value.
    ///
    /// Containers are rebuilt and literals cloned. Stream slots hold `null`
    /// until their stream emits.
    pub fn skeleton(&self) -> Value {
        match self {
            Template::Literal(value) => clone(value),
            Template::Sequence(items) => Value::Array(items.iter().map(Template::skeleton).collect()),
            Template::Mapping(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.skeleton()))
                    .collect(),
            ),
            Template::Stream(_) => Value::Null,
        }
    }
}

impl Template<BoxSource> {
    /// A stream leaf fed by a stream that cannot fail.
    pub fn source<St>(stream: St) -> Self
    where
        St: Stream<Item = Value> + Send + 'static,
    {
        Template::Stream(stream.map(Ok).boxed())
    }
}

impl<E: 'static> Template<BoxSource<E>> {
    /// A stream leaf fed by a fallible stream.
    pub fn try_source<St>(stream: St) -> Self
    where
        St: Stream<Item = Result<Value, E>> + Send + 'static,
    {
        Template::Stream(stream.boxed())
    }
}

impl<S> Default for Template<S> {
    fn default() -> Self {
        Template::Mapping(IndexMap::new())
    }
}

/// JSON arrays and objects become containers; everything else is a literal.
impl<S> From<Value> for Template<S> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Template::Sequence(items.into_iter().map(Template::from).collect()),
            Value::Object(map) => Template::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Template::from(value)))
                    .collect(),
            ),
            other => Template::Literal(other),
        }
    }
}

/// An absent template is an empty mapping.
impl<S> From<Option<Template<S>>> for Template<S> {
    fn from(template: Option<Template<S>>) -> Self {
        template.unwrap_or_default()
    }
}

impl<S> fmt::Debug for Template<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Template::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Template::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            Template::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
