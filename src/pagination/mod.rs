pub mod config;
pub mod fetcher;
pub mod paginated;
pub mod types;

pub use config::{PageConfig, PageConfigBuilder};
pub use fetcher::PageFetcher;
pub use paginated::Paginated;
pub use types::PaginationError;

#[cfg(test)]
mod tests;
