//! Configuration loaded from `.omni-deals.toml`.

mod core;
mod display;
mod loader;

pub use self::core::{OmniConfig, PricingConfig, SourceConfig};
pub use display::DisplayConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Contents written by `omni-deals init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# omni-deals configuration

[display]
# Items per page in the comparison table
page_size = 50

[pricing]
# "upstream" trusts the bestPrice supplied with each item,
# "recomputed" uses the lowest sale price among its quotes
best_price = "upstream"

[source]
# JSON catalog snapshot (array of items)
# catalog = "catalog.json"
"#;
