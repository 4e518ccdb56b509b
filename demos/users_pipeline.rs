//! Users pipeline example.
//!
//! Lists users from a paginated service, sends each one to a slow update
//! call, and consumes the updated users twice: once through a per-item
//! callback and once through the batch-synchronized stream.
//!
//! Run with: cargo run --example users_pipeline

use batch_stream::batch::{BatchProcessor, ConfigBuilder};
use batch_stream::pagination::types::BoxError;
use batch_stream::pagination::{PageConfigBuilder, Paginated};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: String,
}

/// In-memory stand-in for a remote users API with latency
struct UsersService {
    users: Vec<User>,
    latency: Duration,
}

impl UsersService {
    fn new(count: u32) -> Self {
        UsersService {
            users: (1..=count)
                .map(|id| User {
                    id,
                    name: format!("user-{}", id),
                })
                .collect(),
            latency: Duration::from_millis(50),
        }
    }

    async fn list(&self, page: usize, limit: usize) -> Result<Vec<User>, BoxError> {
        tokio::time::sleep(self.latency).await;
        let start = (page - 1).saturating_mul(limit).min(self.users.len());
        let end = (start + limit).min(self.users.len());
        Ok(self.users[start..end].to_vec())
    }

    async fn update(&self, user: User) -> Result<User, BoxError> {
        // update time varies per user
        tokio::time::sleep(self.latency * (1 + user.id % 3)).await;
        Ok(User {
            id: user.id,
            name: format!("processed-{}", user.name),
        })
    }
}

fn build_pipeline(
    service: &Arc<UsersService>,
) -> Result<BatchProcessor<User, User>, Box<dyn std::error::Error>> {
    let lister = Arc::clone(service);
    let pages = Paginated::new(
        move |page: usize, limit: usize| {
            let lister = Arc::clone(&lister);
            async move { lister.list(page, limit).await }
        },
        &PageConfigBuilder::default()
            .page_size(5usize)
            .start_page(1usize)
            .build()?,
    )?;

    let updater = Arc::clone(service);
    let batch = BatchProcessor::new(
        pages.into_stream(),
        move |user: User| {
            let updater = Arc::clone(&updater);
            async move { updater.update(user).await }
        },
        &ConfigBuilder::default().concurrency(4usize).build()?,
    )?;

    Ok(batch)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let service = Arc::new(UsersService::new(23));

    println!("Push: each user is printed as soon as its update completes");
    let summary = build_pipeline(&service)?
        .process(|user| println!("  {} ({})", user.name, user.id))
        .await?;
    println!(
        "Processed {} users in {} windows\n",
        summary.items, summary.windows
    );

    println!("Pull: users arrive one completed window at a time");
    let mut users = Box::pin(build_pipeline(&service)?.into_stream());
    while let Some(user) = users.next().await {
        let user = user?;
        println!("  {} ({})", user.name, user.id);
    }

    Ok(())
}
