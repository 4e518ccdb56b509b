use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::Arc;

use futures::stream::{self, BoxStream, FuturesUnordered, Stream, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use super::config::Config;
use super::processor::ItemProcessor;
use super::types::BatchError;
use super::window::{Window, Windower};
use crate::pagination::types::BoxError;

/// Totals reported by [`BatchProcessor::process`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub windows: usize,
    pub items: usize,
}

/// Processes a lazy item sequence in windows of `concurrency` items.
///
/// Every item of a window is submitted at once and the whole window settles
/// before the next one is pulled from the source, so at most `concurrency`
/// calls are in flight and at most one window is held in memory.
///
/// Results are delivered in completion order, either pushed to a callback
/// ([`process`](Self::process)) or pulled through a stream
/// ([`into_stream`](Self::into_stream)). Both consume the processor: the
/// underlying sequence is single-pass.
///
/// The first failed item aborts the whole run. Its unsettled siblings are
/// dropped, no further window is pulled, and results delivered earlier stay
/// delivered.
pub struct BatchProcessor<T, R> {
    windows: Windower<BoxStream<'static, Result<T, BoxError>>>,
    processor: Arc<dyn ItemProcessor<T, R>>,
    concurrency: usize,
}

impl<T, R> BatchProcessor<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// Creates a processor over a fallible source, e.g.
    /// [`Paginated::into_stream`](crate::pagination::Paginated::into_stream).
    ///
    /// Fails with [`BatchError::Configuration`] when `concurrency` is zero.
    pub fn new<S, E, P>(source: S, processor: P, config: &Config) -> Result<Self, BatchError>
    where
        S: Stream<Item = Result<T, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
        P: ItemProcessor<T, R> + 'static,
    {
        config.validate()?;

        let source: BoxStream<'static, Result<T, BoxError>> = source.map_err(Into::into).boxed();
        Ok(BatchProcessor {
            windows: Windower::new(source, config.concurrency),
            processor: Arc::new(processor),
            concurrency: config.concurrency,
        })
    }

    /// Creates a processor over an in-memory sequence.
    pub fn from_items<I, P>(items: I, processor: P, config: &Config) -> Result<Self, BatchError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        P: ItemProcessor<T, R> + 'static,
    {
        let source = stream::iter(items.into_iter().map(Ok::<T, Infallible>));
        Self::new(source, processor, config)
    }

    #[inline]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Runs the whole sequence, calling `on_item_done` once per processed
    /// item as soon as it settles.
    ///
    /// Returns after every window has settled, or with the first source or
    /// processing error.
    pub async fn process<F>(mut self, mut on_item_done: F) -> Result<ProcessSummary, BatchError>
    where
        F: FnMut(R),
    {
        let mut summary = ProcessSummary::default();

        while let Some(window) = self.next_window().await? {
            let size = window.len();
            Self::settle_window(&self.processor, window, &mut on_item_done).await?;
            summary.windows += 1;
            summary.items += size;
        }

        info!(
            windows = summary.windows,
            items = summary.items,
            "batch processing completed"
        );
        Ok(summary)
    }

    /// Converts the processor into a stream of processed items.
    ///
    /// A window is submitted only when the previous window's results have all
    /// been yielded, and its results are yielded only once it has fully
    /// settled. If an item fails, the results that settled before it are
    /// yielded first, then the error, then the stream ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<R, BatchError>> + Send + 'static {
        let state = PullState {
            batch: self,
            ready: VecDeque::new(),
            failure: None,
            finished: false,
        };

        stream::unfold(state, |mut state| async move {
            loop {
                if let Some(result) = state.ready.pop_front() {
                    return Some((Ok(result), state));
                }
                if let Some(e) = state.failure.take() {
                    return Some((Err(e), state));
                }
                if state.finished {
                    return None;
                }

                match state.batch.next_window().await {
                    Ok(Some(window)) => {
                        let ready = &mut state.ready;
                        let settled = Self::settle_window(&state.batch.processor, window, |result| {
                            ready.push_back(result)
                        })
                        .await;
                        if let Err(e) = settled {
                            state.failure = Some(e);
                            state.finished = true;
                        }
                    }
                    Ok(None) => state.finished = true,
                    Err(e) => {
                        state.failure = Some(e);
                        state.finished = true;
                    }
                }
            }
        })
    }

    async fn next_window(&mut self) -> Result<Option<Window<T>>, BatchError> {
        self.windows.next_window().await.map_err(BatchError::Source)
    }

    /// Submits every item of `window` at once and hands each result to
    /// `on_settled` in completion order. Stops at the first failure, dropping
    /// the calls still in flight.
    async fn settle_window<F>(
        processor: &Arc<dyn ItemProcessor<T, R>>,
        window: Window<T>,
        mut on_settled: F,
    ) -> Result<(), BatchError>
    where
        F: FnMut(R),
    {
        let index = window.index();
        let size = window.len();
        debug!(window = index, size, "submitting window");

        let mut in_flight: FuturesUnordered<_> = window
            .into_items()
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                let processor = Arc::clone(processor);
                async move {
                    processor
                        .process(item)
                        .await
                        .map_err(|source| BatchError::Processing {
                            window: index,
                            position,
                            source,
                        })
                }
            })
            .collect();

        let mut settled = 0;
        while let Some(outcome) = in_flight.next().await {
            match outcome {
                Ok(result) => {
                    settled += 1;
                    on_settled(result);
                }
                Err(e) => {
                    warn!(
                        window = index,
                        settled,
                        abandoned = in_flight.len(),
                        error = %e,
                        "window failed"
                    );
                    return Err(e);
                }
            }
        }

        debug!(window = index, size, "window settled");
        Ok(())
    }
}

struct PullState<T, R> {
    batch: BatchProcessor<T, R>,
    ready: VecDeque<R>,
    failure: Option<BatchError>,
    finished: bool,
}
