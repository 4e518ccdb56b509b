// src/pagination/config.rs

use derive_builder::Builder;

use super::types::PaginationError;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PageConfig {
    /// Number of items requested per page
    #[builder(default = "10")]
    pub(crate) page_size: usize,

    /// First page requested, pages are numbered from 1
    #[builder(default = "1")]
    pub(crate) start_page: usize,
}

impl PageConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == Some(0) {
            return Err("page_size must be at least 1".to_string());
        }
        if self.start_page == Some(0) {
            return Err("start_page must be at least 1".to_string());
        }
        Ok(())
    }
}

impl PageConfig {
    pub fn new(page_size: usize, start_page: usize) -> Self {
        PageConfig {
            page_size,
            start_page,
        }
    }

    /// Returns the number of items requested per page
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the first page requested
    #[inline]
    pub fn start_page(&self) -> usize {
        self.start_page
    }

    pub(crate) fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::Configuration(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.start_page == 0 {
            return Err(PaginationError::Configuration(
                "start_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            page_size: 10,
            start_page: 1,
        }
    }
}
