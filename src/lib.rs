//! # batch-stream
//!
//! Bounded-concurrency processing of large paginated datasets, built on Tokio.
//!
//! ## Features
//!
//! - **Lazy pagination**: a page-based listing becomes one flat item stream,
//!   fetched one page at a time
//! - **Windowed concurrency**: items are processed in windows of `concurrency`
//!   items, one window in flight at a time
//! - **Push or pull**: a per-item callback, or a stream yielding each window's
//!   results once it has settled
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batch_stream::batch::{BatchProcessor, ConfigBuilder};
//! use batch_stream::pagination::{PageConfigBuilder, Paginated};
//!
//! let pages = Paginated::new(
//!     |page: usize, limit: usize| async move { users.list(page, limit).await },
//!     &PageConfigBuilder::default().page_size(5usize).build()?,
//! )?;
//!
//! let batch = BatchProcessor::new(
//!     pages.into_stream(),
//!     |user| async move { users.update(user).await },
//!     &ConfigBuilder::default().concurrency(4usize).build()?,
//! )?;
//!
//! batch.process(|user| println!("{}", user.name)).await?;
//! ```
//!
//! ## Modules
//!
//! - [`pagination`] - Lazy flattening of page-based listings
//! - [`batch`] - Windowed concurrent processing with push and pull delivery

pub mod batch;
pub mod pagination;
