use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::BestPriceMode;

/// Environment variable naming the default catalog file
pub const CATALOG_ENV: &str = "OMNI_DEALS_CATALOG";

#[derive(Parser, Debug)]
#[command(name = "omni-deals")]
#[command(about = "Compare graphic novel prices across retailers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .omni-deals.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the price comparison table
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every retailer that has at least one offer
    Retailers {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Browse the catalog interactively
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Where the catalog comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON catalog snapshot, or `-` for stdin
    #[arg(long, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,
}

/// Arguments shared by commands that show the comparison table.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show (clamped to the available pages)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Items per page (overrides config)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// How the best price is determined (overrides config)
    #[arg(long = "best-price", value_enum)]
    pub best_price: Option<BestPriceArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BestPriceArg {
    /// Trust the bestPrice supplied with each item
    Upstream,
    /// Use the lowest sale price among the item's quotes
    Recomputed,
}

impl From<BestPriceArg> for BestPriceMode {
    fn from(arg: BestPriceArg) -> Self {
        match arg {
            BestPriceArg::Upstream => BestPriceMode::Upstream,
            BestPriceArg::Recomputed => BestPriceMode::Recomputed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "omni-deals",
            "-vv",
            "list",
            "--catalog",
            "books.json",
            "--search",
            "saga",
            "--page",
            "3",
            "--page-size",
            "20",
            "--format",
            "json",
            "--best-price",
            "recomputed",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::List { view, format, output } => {
                assert_eq!(view.source.catalog, Some(PathBuf::from("books.json")));
                assert_eq!(view.search.as_deref(), Some("saga"));
                assert_eq!(view.page, 3);
                assert_eq!(view.page_size, Some(20));
                assert_eq!(view.best_price, Some(BestPriceArg::Recomputed));
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["omni-deals", "list", "--catalog", "x.json"]).unwrap();
        match cli.command {
            Commands::List { view, format, .. } => {
                assert_eq!(view.page, 1);
                assert_eq!(format, OutputFormat::Table);
                assert!(view.page_size.is_none());
                assert!(view.best_price.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_best_price_arg_converts() {
        assert_eq!(
            BestPriceMode::from(BestPriceArg::Upstream),
            BestPriceMode::Upstream
        );
        assert_eq!(
            BestPriceMode::from(BestPriceArg::Recomputed),
            BestPriceMode::Recomputed
        );
    }
}
