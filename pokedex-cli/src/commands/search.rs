use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::{ClientConfig, ListController, PokeApiClient};

use super::{load_config, load_pages, print_entry};
use crate::CliError;
use crate::cli_types::PageArgs;

/// Load pages, then filter the loaded entries by `query`.
pub(crate) fn run_search(query: &str, args: PageArgs, quiet: bool) -> Result<(), CliError> {
    let config = load_config(args.page_size)?;
    let client = PokeApiClient::new(&config)?;
    let rt = crate::runtime()?;

    rt.block_on(search_entries(client, &config, query, &args, quiet))
}

async fn search_entries(
    client: PokeApiClient,
    config: &ClientConfig,
    query: &str,
    args: &PageArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let mut controller = ListController::new(client, config.page_size);
    load_pages(&mut controller, args, quiet).await?;

    let state = controller.search(query);
    let matches = state.visible();
    if matches.is_empty() {
        log::info!(
            "No matches for '{}' among {} loaded entries",
            query.trim().if_supports_color(Stdout, |t| t.yellow()),
            state.entries.len(),
        );
        return Ok(());
    }

    for entry in matches {
        print_entry(entry);
    }
    crate::log_blank();
    log::info!(
        "{} of {} loaded entries match",
        matches.len(),
        state.entries.len()
    );
    Ok(())
}
