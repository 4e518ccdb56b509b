// src/batch/config.rs

use derive_builder::Builder;

use super::types::BatchError;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Number of items submitted together; also the window size
    #[builder(default = "2")]
    pub(crate) concurrency: usize,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.concurrency == Some(0) {
            return Err("concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn new(concurrency: usize) -> Self {
        Config { concurrency }
    }

    /// Returns the maximum number of in-flight processing calls
    #[inline]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub(crate) fn validate(&self) -> Result<(), BatchError> {
        if self.concurrency == 0 {
            return Err(BatchError::Configuration(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { concurrency: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        assert_eq!(Config::new(5).concurrency(), 5);
        assert_eq!(Config::default().concurrency(), 2);

        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.concurrency(), 2);

        let config = ConfigBuilder::default().concurrency(8usize).build().unwrap();
        assert_eq!(config.concurrency(), 8);
    }

    #[test]
    fn test_builder_rejects_zero_concurrency() {
        let result = ConfigBuilder::default().concurrency(0usize).build();
        assert!(result.unwrap_err().to_string().contains("concurrency"));
    }

    #[test]
    fn test_validate() {
        assert!(Config::new(1).validate().is_ok());
        assert!(matches!(
            Config::new(0).validate(),
            Err(BatchError::Configuration(_))
        ));
    }
}
