use thiserror::Error;

/// Boxed error returned by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while walking a paginated listing.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// A page fetch failed; the sequence ends here.
    #[error("failed to fetch page {page}")]
    Fetch {
        page: usize,
        #[source]
        source: BoxError,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}
