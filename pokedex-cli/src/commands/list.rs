use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::{ClientConfig, ListController, PokeApiClient};

use super::{load_config, load_pages, print_entry};
use crate::CliError;
use crate::cli_types::PageArgs;

pub(crate) fn run_list(args: PageArgs, quiet: bool) -> Result<(), CliError> {
    let config = load_config(args.page_size)?;
    let client = PokeApiClient::new(&config)?;
    let rt = crate::runtime()?;

    rt.block_on(list_entries(client, &config, &args, quiet))
}

async fn list_entries(
    client: PokeApiClient,
    config: &ClientConfig,
    args: &PageArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let mut controller = ListController::new(client, config.page_size);
    load_pages(&mut controller, args, quiet).await?;

    let state = controller.state();
    for entry in state.visible() {
        print_entry(entry);
    }

    crate::log_blank();
    log::info!(
        "{} entries loaded ({} page{}){}",
        state.entries.len(),
        state.cursor,
        if state.cursor == 1 { "" } else { "s" },
        if state.end_reached {
            format!(
                " {}",
                "end of catalog".if_supports_color(Stdout, |t| t.green())
            )
        } else {
            String::new()
        },
    );
    Ok(())
}
