use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::{ItemDetail, capitalize, stat_abbreviation};
use pokedex_lib::{PokeApiClient, load_detail};

use super::load_config;
use crate::CliError;
use crate::spinner::spinner;

const BAR_WIDTH: u32 = 30;

pub(crate) fn run_show(name: &str, quiet: bool) -> Result<(), CliError> {
    let config = load_config(None)?;
    let client = PokeApiClient::new(&config)?;
    let rt = crate::runtime()?;

    let pb = spinner(quiet, format!("Fetching {}...", name.trim()));
    let result = rt.block_on(load_detail(&client, name));
    pb.finish_and_clear();

    let detail = result?;
    print_detail(&detail);
    Ok(())
}

fn print_detail(detail: &ItemDetail) {
    log::info!(
        "{} {}",
        format!("#{}", detail.id).if_supports_color(Stdout, |t| t.dimmed()),
        detail.display_name().if_supports_color(Stdout, |t| t.bold()),
    );

    let types: Vec<String> = detail.types.iter().map(|t| capitalize(t)).collect();
    log::info!(
        "  Types:  {}",
        types.join(", ").if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!("  Weight: {:.1} kg", detail.weight_kg());
    log::info!("  Height: {:.1} m", detail.height_m());
    if let Some(url) = &detail.sprite_url {
        log::info!("  Sprite: {}", url);
    }

    if detail.stats.is_empty() {
        return;
    }

    crate::log_blank();
    log::info!("{}", "Base Stats".if_supports_color(Stdout, |t| t.bold()));
    let max = detail.max_base_stat();
    for stat in &detail.stats {
        let label = match stat_abbreviation(&stat.name) {
            "" => stat.name.as_str(),
            abbr => abbr,
        };
        log::info!(
            "  {:<6} {:>3} {}",
            label,
            stat.base,
            bar(stat.base, max).if_supports_color(Stdout, |t| t.green()),
        );
    }
}

/// Horizontal bar proportional to `value / max`.
fn bar(value: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value.min(max) * BAR_WIDTH).div_ceil(max);
    "\u{2588}".repeat(filled as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar(90, 90).chars().count(), BAR_WIDTH as usize);
        assert_eq!(bar(45, 90).chars().count(), (BAR_WIDTH / 2) as usize);
        assert_eq!(bar(1, 90).chars().count(), 1);
        assert_eq!(bar(0, 90), "");
        assert_eq!(bar(10, 0), "");
    }
}
