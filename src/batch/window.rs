use futures::stream::{self, Stream, StreamExt};

/// A group of up to `concurrency` items submitted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    index: usize,
    items: Vec<T>,
}

impl<T> Window<T> {
    /// Position of this window in the sequence, starting at 0
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Groups a fallible item stream into fixed-size windows.
///
/// Only the window being filled is buffered. The last window may be short
/// and is still emitted. A source error discards the partial window and is
/// returned as is; the windower is finished afterwards.
pub struct Windower<S> {
    source: S,
    size: usize,
    next_index: usize,
    finished: bool,
}

impl<S, T, E> Windower<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
{
    /// `size` must be at least 1; callers validate it through their config.
    pub fn new(source: S, size: usize) -> Self {
        Windower {
            source,
            size: size.max(1),
            next_index: 0,
            finished: false,
        }
    }

    pub async fn next_window(&mut self) -> Result<Option<Window<T>>, E> {
        if self.finished {
            return Ok(None);
        }

        let mut items = Vec::with_capacity(self.size);
        while items.len() < self.size {
            match self.source.next().await {
                Some(Ok(item)) => items.push(item),
                Some(Err(e)) => {
                    self.finished = true;
                    return Err(e);
                }
                None => {
                    self.finished = true;
                    break;
                }
            }
        }

        if items.is_empty() {
            return Ok(None);
        }

        let index = self.next_index;
        self.next_index += 1;
        Ok(Some(Window { index, items }))
    }

    /// Converts the windower into a [`Stream`] of windows.
    pub fn into_stream(self) -> impl Stream<Item = Result<Window<T>, E>> {
        stream::unfold(self, |mut windows| async move {
            match windows.next_window().await {
                Ok(Some(window)) => Some((Ok(window), windows)),
                Ok(None) => None,
                Err(e) => Some((Err(e), windows)),
            }
        })
    }
}
