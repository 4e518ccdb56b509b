pub mod batch;
pub mod config;
pub mod processor;
pub mod types;
pub mod window;

pub use batch::{BatchProcessor, ProcessSummary};
pub use config::{Config, ConfigBuilder};
pub use processor::ItemProcessor;
pub use types::BatchError;
pub use window::{Window, Windower};
