//! Command handlers and the setup they share.

pub mod browse;
pub mod init;
pub mod list;
pub mod retailers;

pub use browse::handle_browse_command;
pub use init::{init_config, init_config_in};
pub use list::handle_list_command;
pub use retailers::handle_retailers_command;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::{SourceArgs, ViewArgs, CATALOG_ENV};
use crate::config::{load_config, load_config_from, OmniConfig, CONFIG_FILE_NAME};
use crate::observability::set_catalog_label;
use crate::source::{CatalogFeed, CatalogSource, FeedUpdate, JsonFileSource};
use crate::view::ViewCoordinator;

/// Explicit `--config` file, or the nearest `.omni-deals.toml`.
pub fn resolve_config(explicit: Option<&Path>) -> Result<OmniConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Catalog path from the command line or environment, else from config.
pub fn resolve_catalog_path(source: &SourceArgs, config: &OmniConfig) -> Result<PathBuf> {
    if let Some(path) = &source.catalog {
        return Ok(path.clone());
    }
    if let Some(path) = config.catalog_path() {
        return Ok(path.to_path_buf());
    }
    bail!(
        "No catalog given. Pass --catalog, set {CATALOG_ENV}, or set source.catalog in {CONFIG_FILE_NAME}"
    )
}

/// Perform the initial load. With no previous list to fall back on, a
/// failure here is fatal.
pub fn load_catalog(source: &dyn CatalogSource) -> Result<CatalogFeed> {
    set_catalog_label(source.describe());

    let mut feed = CatalogFeed::new();
    match feed.refresh(source) {
        FeedUpdate::Failed { message } => bail!(message),
        FeedUpdate::EmptyIgnored => {
            log::warn!("Catalog {} is empty", source.describe());
        }
        FeedUpdate::Replaced { .. } => {}
    }
    Ok(feed)
}

/// Page size from the command line, else from config.
pub fn resolve_page_size(view: &ViewArgs, config: &OmniConfig) -> Result<usize> {
    match view.page_size {
        Some(0) => bail!("--page-size must be greater than 0"),
        Some(size) => Ok(size),
        None => Ok(config.page_size()),
    }
}

/// Build a coordinator reflecting the command line, the config, and the feed.
pub fn build_coordinator(
    view: &ViewArgs,
    config: &OmniConfig,
    feed: &CatalogFeed,
) -> Result<ViewCoordinator> {
    let mode = view
        .best_price
        .map(Into::into)
        .unwrap_or_else(|| config.best_price_mode());

    let mut coordinator = ViewCoordinator::new(resolve_page_size(view, config)?)
        .with_best_price_mode(mode)
        .with_items(feed.items());

    if let Some(search) = &view.search {
        coordinator.set_search_text(search.as_str());
    }
    coordinator.set_page(view.page);

    Ok(coordinator)
}

/// Resolve config, load the catalog, and build the coordinator.
pub fn prepare_view(config_path: Option<&Path>, view: &ViewArgs) -> Result<ViewCoordinator> {
    let config = resolve_config(config_path)?;
    let catalog = resolve_catalog_path(&view.source, &config)?;
    let feed = load_catalog(&JsonFileSource::new(catalog))?;
    build_coordinator(view, &config, &feed)
}
