use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use combine_template_pointer::format_json_pointer;
use futures::ready;
use futures::stream::{FusedStream, Stream, StreamExt, TryStream};
use serde_json::Value;

use crate::combine_latest::CombineLatest;
use crate::combiner::PatchCombiner;
use crate::error::TemplateError;

/// The output stream of [`combine_template`](crate::combine_template).
///
/// Yields the combined structure once every stream leaf has emitted, and
/// again on every later leaf emission. Items are shared, read-only views of
/// the structure.
pub struct TemplateStream<S> {
    inner: CombineLatest<S>,
    combiner: PatchCombiner,
    failed: bool,
}

impl<S> TemplateStream<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    pub fn new(inner: CombineLatest<S>, combiner: PatchCombiner) -> Self {
        Self {
            inner,
            combiner,
            failed: false,
        }
    }

    /// JSON pointers of the stream leaves, in snapshot order.
    pub fn pointers(&self) -> Vec<String> {
        self.combiner
            .paths()
            .iter()
            .map(|path| format_json_pointer(path))
            .collect()
    }
}

impl<S> Stream for TemplateStream<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    type Item = Result<Arc<Value>, TemplateError<S::Error>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.failed {
            return Poll::Ready(None);
        }
        let item = match ready!(this.inner.poll_next_unpin(cx)) {
            Some(Ok(snapshot)) => match this.combiner.apply(snapshot) {
                Ok(structure) => Ok(structure),
                Err(err) => {
                    this.failed = true;
                    Err(TemplateError::Combine(err))
                }
            },
            Some(Err(err)) => Err(TemplateError::Source(err)),
            None => return Poll::Ready(None),
        };
        Poll::Ready(Some(item))
    }
}

impl<S> FusedStream for TemplateStream<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.failed || self.inner.is_terminated()
    }
}
