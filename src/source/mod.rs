//! Inbound catalog feed.
//!
//! A [`CatalogSource`] produces a materialized item list. The [`CatalogFeed`]
//! owns the authoritative list and decides whether a new load replaces it.

pub mod feed;

pub use feed::{CatalogFeed, FeedUpdate};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::{CatalogItem, Error, Result};

/// Anything that can produce a catalog snapshot.
pub trait CatalogSource {
    /// Load the full item list.
    fn load(&self) -> Result<Vec<CatalogItem>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Reads a JSON array of catalog items from a file, or from stdin for `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_contents(&self) -> Result<String> {
        if self.is_stdin() {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            return Ok(contents);
        }
        fs::read_to_string(&self.path).map_err(|e| Error::source_io(&self.path, e))
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<CatalogItem>> {
        let contents = self.read_contents()?;
        parse_catalog(&contents).map_err(|e| match e {
            Error::Json(json) => Error::source_at(
                format!("invalid catalog JSON: {json}"),
                self.path.clone(),
            ),
            other => other,
        })
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

/// An already-materialized list, used for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<CatalogItem>,
}

impl StaticSource {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl CatalogSource for StaticSource {
    fn load(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} items)", self.items.len())
    }
}

/// Parse catalog JSON text.
///
/// Accepts a top-level array of items. A blank document is an empty catalog.
pub fn parse_catalog(contents: &str) -> Result<Vec<CatalogItem>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(contents)?)
}
