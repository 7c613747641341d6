//! Combine-latest over a fixed list of sources.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{FusedStream, Stream, TryStream, TryStreamExt};
use serde_json::Value;
use tracing::debug;

use crate::config::EmptyPolicy;

/// Emits the latest value of every source whenever any source emits.
///
/// Nothing is emitted until every source has produced a value; values that
/// arrive before then only update that source's slot. Afterwards each source
/// emission yields one snapshot, ordered like the sources.
///
/// The stream ends when every source has completed, when a source completes
/// without ever emitting, or right after a source error has been yielded.
/// Sources are dropped as soon as the stream ends.
pub struct CombineLatest<S> {
    sources: Vec<Option<S>>,
    latest: Vec<Option<Value>>,
    missing: usize,
    live: usize,
    cursor: usize,
    empty: EmptyPolicy,
    done: bool,
}

/// Combine `sources` with the default [`EmptyPolicy`].
pub fn combine_latest<S>(sources: Vec<S>) -> CombineLatest<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    CombineLatest::new(sources, EmptyPolicy::default())
}

impl<S> CombineLatest<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    pub fn new(sources: Vec<S>, empty: EmptyPolicy) -> Self {
        let len = sources.len();
        Self {
            sources: sources.into_iter().map(Some).collect(),
            latest: vec![None; len],
            missing: len,
            live: len,
            cursor: 0,
            empty,
            done: false,
        }
    }

    fn finish(&mut self) {
        self.done = true;
        self.sources.clear();
    }

    fn snapshot(&self) -> Vec<Value> {
        self.latest.iter().flatten().cloned().collect()
    }
}

impl<S> Stream for CombineLatest<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    type Item = Result<Vec<Value>, S::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        let len = this.sources.len();
        if len == 0 {
            this.finish();
            return match this.empty {
                EmptyPolicy::EmitOnce => Poll::Ready(Some(Ok(Vec::new()))),
                EmptyPolicy::Never => Poll::Ready(None),
            };
        }

        let mut progressed = false;
        for offset in 0..len {
            let i = (this.cursor + offset) % len;
            let Some(source) = this.sources[i].as_mut() else {
                continue;
            };
            match source.try_poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(value))) => {
                    if this.latest[i].replace(value).is_none() {
                        this.missing -= 1;
                    }
                    if this.missing == 0 {
                        // Start the next pass after this source.
                        this.cursor = (i + 1) % len;
                        return Poll::Ready(Some(Ok(this.snapshot())));
                    }
                    progressed = true;
                }
                Poll::Ready(Some(Err(err))) => {
                    debug!(source = i, "source failed");
                    this.finish();
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(None) => {
                    this.sources[i] = None;
                    this.live -= 1;
                    if this.latest[i].is_none() {
                        debug!(source = i, "source completed before emitting");
                        this.finish();
                        return Poll::Ready(None);
                    }
                    if this.live == 0 {
                        debug!("all sources completed");
                        this.finish();
                        return Poll::Ready(None);
                    }
                }
                Poll::Pending => {}
            }
        }

        // A source produced a value but some slot is still empty: poll again
        // so ready sources are drained without waiting on an external wake.
        if progressed {
            cx.waker().wake_by_ref();
        }
        Poll::Pending
    }
}

impl<S> FusedStream for CombineLatest<S>
where
    S: TryStream<Ok = Value> + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
