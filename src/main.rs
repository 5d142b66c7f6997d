use anyhow::Result;
use clap::Parser;
use omni_deals::cli::{Cli, Commands};
use omni_deals::commands::{
    handle_browse_command, handle_list_command, handle_retailers_command, init_config,
};
use omni_deals::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbosity);
    install_panic_hook();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::List {
            view,
            format,
            output,
        } => handle_list_command(config, &view, format, output),
        Commands::Retailers { source } => handle_retailers_command(config, &source),
        Commands::Browse { view } => handle_browse_command(config, &view),
        Commands::Init { force } => init_config(force),
    }
}
