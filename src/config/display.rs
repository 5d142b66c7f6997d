use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::view::DEFAULT_PAGE_SIZE;

/// Display configuration for the comparison table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Items per page (default: 50)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Configuration(
                "display.page_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_size_defaults() {
        let display: DisplayConfig = toml::from_str("").unwrap();
        assert_eq!(display.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_validate() {
        assert!(DisplayConfig { page_size: 1 }.validate().is_ok());
        assert!(DisplayConfig { page_size: 0 }.validate().is_err());
    }
}
