//! pokedex CLI
//!
//! Command-line front end for browsing the Pokédex catalog.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::List { pages } => commands::list::run_list(pages, cli.quiet),
        Commands::Search { query, pages } => {
            commands::search::run_search(&query, pages, cli.quiet)
        }
        Commands::Show { name } => commands::show::run_show(&name, cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set {
                base_url,
                page_size,
            } => commands::config::run_config_set(base_url, page_size),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Route `log` output to stdout. Plain messages unless verbose, in which
/// case timestamps and levels are kept. `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.target(env_logger::Target::Stdout);
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Log an empty line (keeps spacing consistent with the logger).
pub(crate) fn log_blank() {
    log::info!("");
}

/// Build the async runtime used to drive catalog requests.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
