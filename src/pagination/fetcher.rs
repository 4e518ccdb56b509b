// src/pagination/fetcher.rs

use async_trait::async_trait;

use super::types::BoxError;

/// Fetches one page of a remote listing.
///
/// Implementations must be idempotent per `(page, limit)` and return fewer
/// than `limit` items exactly when no more data follows.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Vec<T>, BoxError>;
}

#[async_trait]
impl<T, F, Fut> PageFetcher<T> for F
where
    F: Fn(usize, usize) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<Vec<T>, BoxError>> + Send,
    T: Send,
{
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Vec<T>, BoxError> {
        self(page, limit).await
    }
}
