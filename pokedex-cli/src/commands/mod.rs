pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_api::ClientConfig;
use pokedex_core::DisplayEntry;
use pokedex_lib::{CatalogSource, ListController};

use crate::CliError;
use crate::cli_types::PageArgs;
use crate::spinner::spinner;

/// Resolve client config, applying a command-line page size if given.
pub(crate) fn load_config(page_size: Option<u32>) -> Result<ClientConfig, CliError> {
    let config = ClientConfig::load()?;
    match page_size {
        Some(n) => Ok(config.with_page_size(n)?),
        None => Ok(config),
    }
}

/// Load up to `args.pages` pages, stopping early at the end of the catalog.
///
/// A failed page is retried once before giving up.
pub(crate) async fn load_pages<S: CatalogSource>(
    controller: &mut ListController<S>,
    args: &PageArgs,
    quiet: bool,
) -> Result<(), CliError> {
    for _ in 0..args.pages {
        if !controller.state().can_load_more() {
            break;
        }

        let pb = spinner(
            quiet,
            format!("Loading page {}...", controller.state().cursor + 1),
        );
        let mut state = controller.load_next_page().await;
        if state.has_error() {
            pb.set_message(format!("Retrying page {}...", state.cursor + 1));
            state = controller.load_next_page().await;
        }
        pb.finish_and_clear();

        if state.has_error() {
            return Err(CliError::load(state.load_error.clone()));
        }
    }
    Ok(())
}

pub(crate) fn print_entry(entry: &DisplayEntry) {
    log::info!(
        "  {} {}",
        format!("#{:04}", entry.id).if_supports_color(Stdout, |t| t.dimmed()),
        entry.name.if_supports_color(Stdout, |t| t.bold()),
    );
}
