//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokédex catalog from the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that page through the catalog.
#[derive(Args, Clone)]
pub(crate) struct PageArgs {
    /// Number of pages to load
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Entries per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List catalog entries page by page
    List {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Search loaded entries by name or number
    Search {
        /// Name fragment or exact number
        query: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Show details for one entry
    Show {
        /// Name or number of the entry
        name: String,
    },

    /// Inspect client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved configuration and where each value came from
    Show,

    /// Print the config file path
    Path,

    /// Write values to the config file
    Set {
        /// Catalog API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Entries per page
        #[arg(long)]
        page_size: Option<u32>,
    },
}
