use std::collections::VecDeque;
use std::sync::Arc;

use futures::Stream;
use futures::stream;
use tracing::debug;

use super::config::PageConfig;
use super::fetcher::PageFetcher;
use super::types::PaginationError;

/// Flattens a page-based listing into one lazy sequence of items.
///
/// Pages are requested from `start_page` upward, one fetch at a time and only
/// when the previous page has been drained. The first page holding fewer than
/// `page_size` items is the last one; its items are still emitted.
///
/// The sequence is single-pass: once exhausted or failed it stays finished.
/// Walking the listing again means building a new `Paginated`, which fetches
/// the start page again.
pub struct Paginated<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    page_size: usize,
    next_page: usize,
    buffer: VecDeque<T>,
    pages_fetched: usize,
    finished: bool,
}

impl<T> Paginated<T>
where
    T: Send + 'static,
{
    /// Creates a sequence over `fetcher`.
    ///
    /// Fails with [`PaginationError::Configuration`] before any fetch when the
    /// page size or the start page is zero.
    pub fn new<F>(fetcher: F, config: &PageConfig) -> Result<Self, PaginationError>
    where
        F: PageFetcher<T> + 'static,
    {
        config.validate()?;

        Ok(Paginated {
            fetcher: Arc::new(fetcher),
            page_size: config.page_size,
            next_page: config.start_page,
            buffer: VecDeque::with_capacity(config.page_size),
            pages_fetched: 0,
            finished: false,
        })
    }

    /// Number of page fetches issued so far, failed ones included.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Pulls the next item, fetching the next page when the buffered one is
    /// drained. Returns `None` once the listing is exhausted or after an
    /// error has been returned.
    pub async fn next_item(&mut self) -> Option<Result<T, PaginationError>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.finished {
                return None;
            }

            let page = self.next_page;
            self.pages_fetched += 1;
            match self.fetcher.fetch_page(page, self.page_size).await {
                Ok(items) => {
                    debug!(page, count = items.len(), limit = self.page_size, "fetched page");
                    if items.len() < self.page_size {
                        self.finished = true;
                    } else {
                        self.next_page += 1;
                    }
                    self.buffer.extend(items);
                }
                Err(source) => {
                    self.finished = true;
                    return Some(Err(PaginationError::Fetch { page, source }));
                }
            }
        }
    }

    /// Converts the sequence into a [`Stream`] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, PaginationError>> + Send + 'static {
        stream::unfold(self, |mut pages| async move {
            let item = pages.next_item().await?;
            Some((item, pages))
        })
    }
}
