use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use crate::catalog::BestPriceMode;
use crate::core::{Error, Result};

/// Root configuration structure for omni-deals
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OmniConfig {
    /// Table and paging settings
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Best price evaluation
    #[serde(default)]
    pub pricing: Option<PricingConfig>,

    /// Where the catalog comes from
    #[serde(default)]
    pub source: Option<SourceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingConfig {
    #[serde(default)]
    pub best_price: BestPriceMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SourceConfig {
    /// Path to a JSON catalog snapshot
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl OmniConfig {
    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if let Some(display) = &self.display {
            display.validate()?;
        }
        if let Some(path) = self.catalog_path() {
            if path.as_os_str().is_empty() {
                return Err(Error::Configuration(
                    "source.catalog must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn page_size(&self) -> usize {
        self.display
            .as_ref()
            .map(|d| d.page_size)
            .unwrap_or_else(super::display::default_page_size)
    }

    pub fn best_price_mode(&self) -> BestPriceMode {
        self.pricing
            .as_ref()
            .map(|p| p.best_price)
            .unwrap_or_default()
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.source.as_ref().and_then(|s| s.catalog.as_deref())
    }
}
