use thiserror::Error;

use crate::pagination::types::BoxError;

/// Errors that can occur while processing a windowed sequence.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The item source failed, e.g. a page fetch.
    ///
    /// The window being filled is discarded.
    #[error("item source failed")]
    Source(#[source] BoxError),

    /// Processing one item failed.
    ///
    /// `position` is the item's submission slot inside window `window`.
    #[error("processing failed for item {position} of window {window}")]
    Processing {
        window: usize,
        position: usize,
        #[source]
        source: BoxError,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}
