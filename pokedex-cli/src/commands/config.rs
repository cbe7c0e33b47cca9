use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_api::{ClientConfig, config_path, config_sources, save_to_file};

use crate::CliError;

/// Show resolved configuration and where each value came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let config = ClientConfig::load()?;
    let sources = config_sources();

    log::info!(
        "{}",
        "Pokédex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    log::info!(
        "  {:<10} {}  {}",
        "base_url",
        config.base_url,
        format!("({})", sources.base_url).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {:<10} {}  {}",
        "page_size",
        config.page_size,
        format!("({})", sources.page_size).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }

    Ok(())
}

/// Merge the given values into the config file.
///
/// Environment overrides are not read here, so they never leak into the
/// file.
pub(crate) fn run_config_set(
    base_url: Option<String>,
    page_size: Option<u32>,
) -> Result<(), CliError> {
    if base_url.is_none() && page_size.is_none() {
        return Err(CliError::config(
            "Nothing to set; pass --base-url and/or --page-size",
        ));
    }

    let path =
        config_path().ok_or_else(|| CliError::config("Could not determine config directory"))?;
    let current = ClientConfig::load_from_path(&path)?;
    let updated = apply_overrides(current, base_url, page_size)?;
    let written = save_to_file(&updated)?;

    log::info!(
        "{} Saved configuration to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        written.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn apply_overrides(
    config: ClientConfig,
    base_url: Option<String>,
    page_size: Option<u32>,
) -> Result<ClientConfig, CliError> {
    let config = match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    };
    match page_size {
        Some(n) => Ok(config.with_page_size(n)?),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let base = ClientConfig::default().with_page_size(50).unwrap();

        let updated =
            apply_overrides(base.clone(), Some("http://localhost:9000/api/".to_string()), None)
                .unwrap();
        assert_eq!(updated.base_url, "http://localhost:9000/api");
        assert_eq!(updated.page_size, 50);

        let updated = apply_overrides(base, None, Some(10)).unwrap();
        assert_eq!(updated.base_url, pokedex_api::DEFAULT_BASE_URL);
        assert_eq!(updated.page_size, 10);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = apply_overrides(ClientConfig::default(), None, Some(0)).unwrap_err();
        assert!(matches!(err, CliError::Catalog(_)));
    }
}
