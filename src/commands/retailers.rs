use anyhow::Result;
use std::path::Path;

use super::{load_catalog, resolve_catalog_path, resolve_config};
use crate::catalog::columns;
use crate::cli::SourceArgs;
use crate::output::emit;

pub fn handle_retailers_command(config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    let config = resolve_config(config_path)?;
    let catalog = resolve_catalog_path(source, &config)?;
    let feed = load_catalog(&crate::source::JsonFileSource::new(catalog))?;

    let items = feed.items();
    emit(&render_retailers(&columns(items.iter())), None)
}

/// One retailer per line.
pub fn render_retailers(retailers: &[String]) -> String {
    retailers.iter().map(|name| format!("{name}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_retailers() {
        let retailers = vec!["Amazon".to_string(), "Waterstones".to_string()];
        assert_eq!(render_retailers(&retailers), "Amazon\nWaterstones\n");
        assert_eq!(render_retailers(&[]), "");
    }
}
