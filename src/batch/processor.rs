// src/batch/processor.rs

use async_trait::async_trait;

use crate::pagination::types::BoxError;

/// The slow external operation applied to every item.
#[async_trait]
pub trait ItemProcessor<T, R>: Send + Sync {
    async fn process(&self, item: T) -> Result<R, BoxError>;
}

#[async_trait]
impl<T, R, F, Fut> ItemProcessor<T, R> for F
where
    F: Fn(T) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<R, BoxError>> + Send,
    T: Send + 'static,
{
    async fn process(&self, item: T) -> Result<R, BoxError> {
        self(item).await
    }
}
