use anyhow::{bail, Result};
use std::io::IsTerminal;
use std::path::Path;

use super::{build_coordinator, load_catalog, resolve_catalog_path, resolve_config};
use crate::cli::ViewArgs;
use crate::source::JsonFileSource;
use crate::tui::{BrowserApp, CatalogExplorer};

pub fn handle_browse_command(config_path: Option<&Path>, view: &ViewArgs) -> Result<()> {
    let config = resolve_config(config_path)?;
    let catalog = resolve_catalog_path(&view.source, &config)?;

    if catalog.as_os_str() == "-" {
        bail!("browse reads keys from the terminal; pass a catalog file instead of stdin");
    }
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `omni-deals list` instead");
    }

    let source = JsonFileSource::new(catalog);
    let feed = load_catalog(&source)?;
    let coordinator = build_coordinator(view, &config, &feed)?;

    log::info!(
        "Browsing {} items ({} pages)",
        coordinator.items().len(),
        coordinator.total_pages()
    );

    let app = BrowserApp::new(coordinator, feed, Box::new(source));
    let mut explorer = CatalogExplorer::new(app)?;
    explorer.run()
}
